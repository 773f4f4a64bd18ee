pub mod device;
pub mod distribution;
pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod preprocessor;

#[cfg(test)]
pub mod test;
