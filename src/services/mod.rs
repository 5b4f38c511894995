pub mod completion;

pub use completion::ChatCompletionClient;
