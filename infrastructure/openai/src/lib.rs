pub mod chat_relay;
pub mod client;
pub mod receipt_extractor;

#[cfg(test)]
pub(crate) mod test_support;
