//! End-to-end checks that run the stages together over files on disk.

#[cfg(test)]
mod pipeline;
