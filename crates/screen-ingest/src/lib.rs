pub mod codec;
pub mod csv_codec;
pub mod error;
pub mod load;

pub use codec::{TabularCodec, codec_for_path};
pub use csv_codec::CsvCodec;
pub use error::{IngestError, Result};
pub use load::{Dataset, LoadOptions, load_records, read_dataset, read_records, write_output};
