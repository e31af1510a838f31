use askama::Template;

pub const UPLOAD_PAGE: &str = include_str!("../templates/upload.html");

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage<'a> {
    text: &'a str,
    encoded_text: String,
}

impl<'a> ResultPage<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            encoded_text: urlencoding::encode(text).into_owned(),
        }
    }
}
