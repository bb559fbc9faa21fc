pub mod answers_service;
pub mod clean_service;
pub mod exam_service;
pub mod scrub_service;
