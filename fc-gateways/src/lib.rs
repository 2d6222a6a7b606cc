pub mod code_cipher;
pub mod notify;
