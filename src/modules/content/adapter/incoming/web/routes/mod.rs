mod admin_records;
mod collections;
mod cv;
mod gallery;
mod posts;
mod projects;
mod site;

pub use admin_records::{admin_scope, configure_admin_content};
pub use collections::{
    get_certificates_handler, get_education_handler, get_experience_handler, get_skills_handler,
};
pub use cv::get_cv_handler;
pub use gallery::get_gallery_handler;
pub use posts::{get_post_handler, get_posts_handler};
pub use projects::{get_project_handler, get_projects_handler};
pub use site::get_site_handler;
