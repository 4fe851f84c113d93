/// Wish display page
use crate::ui::html::{escape, gallery, layout};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use wish_core::{age::age_on, types::UserRecord};

/// Messages the display page picks from
pub const WISHES: [&str; 6] = [
    "May every moment of the year ahead bring you joy, and every day a new gift!",
    "May all your dreams come true and every day bring fresh excitement!",
    "Hope in your heart, a sparkle in your eyes: that is our wish for you!",
    "May this birthday bring new happiness and new hopes to light your way!",
    "May this day be truly yours, and may every sorrow stay far away!",
    "May your smile keep shining just like this, and your heart stay happy!",
];

/// Pick one wish at random
pub fn pick_wish<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WISHES.choose(rng).copied().unwrap_or(WISHES[0])
}

/// Render the celebration page for a freshly created record
pub fn render_wish(record: &UserRecord, wish: &str, today: NaiveDate) -> String {
    let age = age_on(record.date_of_birth, today);

    let body = format!(
        "<div class=\"card\" style=\"text-align:center\">\n\
<h1>Happy Birthday {first} {last}!</h1>\n\
<p class=\"age\">Today you are {age} years old! Congratulations!</p>\n\
<blockquote class=\"wish\"><em>{wish}</em></blockquote>\n\
</div>\n\
<div class=\"card\">{gallery}</div>\n\
<div class=\"card\" style=\"text-align:center\">\n\
<p>Wishing you a long and happy life!</p>\n\
<a class=\"button\" href=\"/\">Create Another Wish</a>\n\
</div>",
        first = escape(&record.first_name),
        last = escape(&record.last_name),
        age = age,
        wish = escape(wish),
        gallery = gallery(&record.images, "Memory"),
    );

    layout(&format!("Happy Birthday {}!", record.first_name), &body)
}
