pub mod handler;
pub mod responder;
pub mod response;
pub mod validation;

pub use responder::ApiResponder;
pub use response::{
    ApiReply, ErrorBody, ErrorEnvelope, ErrorInput, Metadata, Pagination, SuccessEnvelope,
    SuccessOptions,
};
