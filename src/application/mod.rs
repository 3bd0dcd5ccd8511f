pub mod authorizer;
pub mod sheet_error;
pub mod sheet_reader;
pub mod sheet_writer;
