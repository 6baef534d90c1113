pub mod model_summary;
