/// Who a message is being resolved for.
///
/// Receivers resolve through their stored language preference; the console
/// resolves through the configured console language.
#[derive(Debug, PartialEq, Eq)]
pub enum Target<'a, R> {
    Receiver(&'a R),
    Console,
}

impl<R> Clone for Target<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Target<'_, R> {}

impl<'a, R> From<&'a R> for Target<'a, R> {
    fn from(receiver: &'a R) -> Self {
        Target::Receiver(receiver)
    }
}
