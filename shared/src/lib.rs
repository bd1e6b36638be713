mod accept;
mod data_url;
mod prediction;

pub use accept::{ImageKind, accept_attribute};
pub use data_url::{DataUrl, DataUrlError};
pub use prediction::{
    ApiErrorBody, ClassifyReply, ClassifyRequest, ClassifyResponse, ImagePayload, Prediction,
    SchemaError, capitalize_label, parse_classify_reply,
};
