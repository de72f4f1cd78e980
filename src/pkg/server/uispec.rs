use askama::Template;

use crate::pkg::internal::adaptors::resumes::spec::ResumeRecord;

#[derive(Template)]
#[template(path = "home.html")]
pub struct Home {
    pub resumes: Vec<ResumeRecord>,
}

#[derive(Template)]
#[template(path = "builder.html")]
pub struct Builder {}
