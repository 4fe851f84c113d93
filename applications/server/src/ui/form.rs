/// Wish form page and its submit transition
use crate::{
    api::multipart::FormParts,
    services::SubmissionService,
    ui::{
        display::{pick_wish, render_wish},
        html::{escape, layout},
    },
};
use axum::http::StatusCode;
use chrono::Utc;
use wish_core::{
    types::{ImageFile, UserRecord},
    validation::{validate, Field, FieldErrors, SubmissionInput},
};

/// Banner shown when a valid form could not be turned into a record
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form";

/// Text the user typed, echoed back when the form is shown again
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl FormValues {
    pub fn from_parts(parts: &FormParts) -> Self {
        Self {
            first_name: parts.text(Field::FirstName.as_str()),
            last_name: parts.text(Field::LastName.as_str()),
            date_of_birth: parts.text(Field::DateOfBirth.as_str()),
        }
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::DateOfBirth => &self.date_of_birth,
            Field::Images => "",
        }
    }
}

/// The form page is either still collecting input or showing the created wish
#[derive(Debug, Clone)]
pub enum FormState {
    Collecting {
        values: FormValues,
        errors: FieldErrors,
        banner: Option<String>,
    },
    Submitted {
        record: UserRecord,
    },
}

impl Default for FormState {
    fn default() -> Self {
        Self::Collecting {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            banner: None,
        }
    }
}

impl FormState {
    /// Collecting state with a generic failure banner
    pub fn failed(values: FormValues) -> Self {
        Self::Collecting {
            values,
            errors: FieldErrors::default(),
            banner: Some(SUBMIT_FAILED_MESSAGE.to_string()),
        }
    }

    /// Validate locally; only a valid form reaches the submission service.
    pub async fn submit(
        service: &SubmissionService,
        values: FormValues,
        images: Vec<ImageFile>,
    ) -> Self {
        let input = SubmissionInput {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            date_of_birth: values.date_of_birth.clone(),
            images,
        };

        let submission = match validate(input) {
            Ok(submission) => submission,
            Err(errors) => {
                return Self::Collecting {
                    values,
                    errors,
                    banner: None,
                }
            }
        };

        match service.create_validated(submission).await {
            Ok(record) => Self::Submitted { record },
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                Self::failed(values)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Submitted { .. } => StatusCode::OK,
            Self::Collecting { banner: Some(_), .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Collecting { errors, .. } if !errors.is_empty() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Collecting { .. } => StatusCode::OK,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::Collecting {
                values,
                errors,
                banner,
            } => render_form(values, errors, banner.as_deref()),
            Self::Submitted { record } => render_wish(
                record,
                pick_wish(&mut rand::thread_rng()),
                Utc::now().date_naive(),
            ),
        }
    }
}

fn render_field(
    field: Field,
    label: &str,
    input_type: &str,
    values: &FormValues,
    errors: &FieldErrors,
) -> String {
    let error = errors.get(field);
    format!(
        "<label for=\"{name}\">{label}</label>\n\
<input id=\"{name}\" name=\"{name}\" type=\"{input_type}\" value=\"{value}\"{class}>\n{error}",
        name = field.as_str(),
        label = label,
        input_type = input_type,
        value = escape(values.get(field)),
        class = if error.is_some() { " class=\"invalid\"" } else { "" },
        error = error
            .map(|msg| format!("<p class=\"error\">{}</p>\n", escape(msg)))
            .unwrap_or_default(),
    )
}

/// Render the collecting state
pub fn render_form(values: &FormValues, errors: &FieldErrors, banner: Option<&str>) -> String {
    let images_error = errors.get(Field::Images);

    let body = format!(
        "<div style=\"text-align:center\">\n\
<h1>Birthday Wish Maker</h1>\n\
<p>Make your birthday unforgettable! Upload your photos and create a beautiful wish.</p>\n\
</div>\n\
<div class=\"card\">\n\
<h2>Birthday Celebration Form</h2>\n\
{banner}\
<form method=\"post\" action=\"/\" enctype=\"multipart/form-data\">\n\
{first}{last}{dob}\
<label for=\"images\">Upload Images</label>\n\
<input id=\"images\" name=\"images\" type=\"file\" multiple accept=\"image/*\"{images_class}>\n\
{images_error}\
<button type=\"submit\">Create Birthday Wish!</button>\n\
</form>\n\
</div>",
        banner = banner
            .map(|msg| format!("<p class=\"banner\">{}</p>\n", escape(msg)))
            .unwrap_or_default(),
        first = render_field(Field::FirstName, "First Name", "text", values, errors),
        last = render_field(Field::LastName, "Last Name", "text", values, errors),
        dob = render_field(Field::DateOfBirth, "Date of Birth", "date", values, errors),
        images_class = if images_error.is_some() {
            " class=\"invalid\""
        } else {
            ""
        },
        images_error = images_error
            .map(|msg| format!("<p class=\"error\">{}</p>\n", escape(msg)))
            .unwrap_or_default(),
    );

    layout("Birthday Wish Maker", &body)
}
