// Résumé vs job description analysis: overlap fit score plus model feedback.

pub mod handlers;
pub mod service;
