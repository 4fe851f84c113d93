/// HTML helpers shared by every page

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;padding:2rem;background:#f7f2fb;color:#2d1b3d}\
main{max-width:960px;margin:0 auto}\
.card{background:#fff;border-radius:12px;padding:1.5rem;margin-bottom:1.5rem;box-shadow:0 4px 16px rgba(0,0,0,.08)}\
label{display:block;font-weight:600;margin-top:1rem}\
input{width:100%;padding:.5rem;margin-top:.25rem;box-sizing:border-box}\
input.invalid{border:1px solid #d33}\
.error{color:#d33;font-size:.875rem;margin:.25rem 0 0}\
.banner{background:#fde8e8;color:#9b1c1c;padding:.75rem;border-radius:8px}\
.gallery{display:grid;grid-template-columns:repeat(auto-fill,minmax(180px,1fr));gap:.75rem}\
.gallery img{width:100%;aspect-ratio:1;object-fit:cover;border-radius:8px}\
button,.button{display:inline-block;margin-top:1.25rem;padding:.6rem 1.2rem;border:0;border-radius:8px;background:#8b3fd9;color:#fff;text-decoration:none;cursor:pointer}";

/// Wrap a page body in a complete document
pub fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// Image grid for a record's URLs
pub fn gallery(images: &[String], alt_prefix: &str) -> String {
    let mut out = String::from("<div class=\"gallery\">");
    for (index, url) in images.iter().enumerate() {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{} {}\" loading=\"lazy\">",
            escape(url),
            escape(alt_prefix),
            index + 1
        ));
    }
    out.push_str("</div>");
    out
}
