/// Plain message error used on the boot path.
pub mod custom_error;
