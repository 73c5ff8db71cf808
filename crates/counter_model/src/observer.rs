/// Receives a notification after every counter mutation.
///
/// Implementors read whatever state they need from the model themselves;
/// the notification carries no payload.
pub trait Observer {
    fn update(&self);
}
