/// Core validation trait shared by the palette checks.
///
/// # Type Parameters
///
/// * `T` - The type of data being validated (can be unsized like `str`)
pub trait Validator<T: ?Sized> {
    type Error;

    /// Validate the input and return Ok(()) if valid, or Err with validation error
    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
