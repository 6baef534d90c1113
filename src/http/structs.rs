/// JSON summary of one loaded model.
pub mod model_summary;
