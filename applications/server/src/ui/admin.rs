/// Admin page: shared-secret gate and record listing
use crate::ui::html::{escape, gallery, layout};
use chrono::NaiveDate;
use wish_core::{age::age_on, types::UserRecord};

/// "May 10, 2000"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Password form, optionally with an error line
pub fn render_login(error: Option<&str>) -> String {
    let body = format!(
        "<div class=\"card\" style=\"max-width:420px;margin:4rem auto\">\n\
<h1>Admin Dashboard</h1>\n\
{error}\
<form method=\"post\" action=\"/admin\">\n\
<label for=\"password\">Password</label>\n\
<input id=\"password\" name=\"password\" type=\"password\" placeholder=\"Enter admin password\">\n\
<button type=\"submit\">Login</button>\n\
</form>\n\
</div>",
        error = error
            .map(|msg| format!("<p class=\"banner\">{}</p>\n", escape(msg)))
            .unwrap_or_default(),
    );

    layout("Admin Dashboard", &body)
}

fn render_record(record: &UserRecord, today: NaiveDate) -> String {
    format!(
        "<div class=\"card record\">\n\
<h2>{name}</h2>\n\
<p><strong>Date of Birth:</strong> {dob}</p>\n\
<p><strong>Age:</strong> {age} years</p>\n\
<p><strong>Created:</strong> {created}</p>\n\
<p><strong>Images:</strong> {count} photo(s)</p>\n\
<p><strong>User ID:</strong> {id}</p>\n\
<h3>Uploaded Images:</h3>\n\
{gallery}\n\
</div>\n",
        name = escape(&record.full_name()),
        dob = format_date(record.date_of_birth),
        age = age_on(record.date_of_birth, today),
        created = format_date(record.created_at.date_naive()),
        count = record.images.len(),
        id = escape(record.id.as_str()),
        gallery = gallery(&record.images, "User image"),
    )
}

fn dashboard(content: &str) -> String {
    let body = format!(
        "<div style=\"display:flex;justify-content:space-between;align-items:center\">\n\
<h1>Admin Dashboard</h1>\n\
<a class=\"button\" href=\"/admin\">Logout</a>\n\
</div>\n\
{}",
        content
    );
    layout("Admin Dashboard", &body)
}

/// Every record, in the order given
pub fn render_dashboard(records: &[UserRecord], today: NaiveDate) -> String {
    if records.is_empty() {
        return dashboard("<div class=\"card\" style=\"text-align:center\"><p>No users found</p></div>");
    }

    let content: String = records
        .iter()
        .map(|record| render_record(record, today))
        .collect();
    dashboard(&content)
}

/// Dashboard frame with an error in place of the listing
pub fn render_dashboard_error(message: &str) -> String {
    dashboard(&format!("<p class=\"banner\">{}</p>", escape(message)))
}
