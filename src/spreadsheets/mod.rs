pub mod batches;
pub mod export_xlsx;

pub use batches::assemble_batches;
pub use export_xlsx::export_processor_file;
