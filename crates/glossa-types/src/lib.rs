pub mod types;

pub use types::{DefineResponse, LookupResponse, ResponseCode, RpcRequest, RpcResponse, WordRequest};
