pub mod cli;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod profile;
pub mod report;

pub mod prelude {
    pub use crate::input::RecordError;
    pub use crate::input::record::decode_line;
    pub use crate::model::command::Command;
    pub use crate::model::record::CommandRecord;
    pub use crate::model::variant::Variant;
    pub use crate::pipeline::transform::Transformer;
}
