pub mod error;
pub mod fs;
pub mod http;
pub mod sink;

pub use error::StoreError;
pub use fs::FsObjectSink;
pub use http::HttpObjectSink;
pub use sink::ObjectSink;
