use crate::error::MavgenError;

/// Retrieves the raw bytes behind an address (a filesystem path or a URL).
///
/// Implementations must report failures as `MavgenError::Fetch` so that the
/// offending address reaches the user.
pub trait Fetch {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, MavgenError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, MavgenError> {
        (**self).fetch(address)
    }
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, MavgenError> {
        (**self).fetch(address)
    }
}
