mod validator;

pub use validator::IAssessmentValidator;
