use crate::facade::LogFacade;
use crate::layer::FacadeLayer;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Route every `tracing` event in the process through `facade`.
///
/// **Parameters**
/// - `facade`: [`LogFacade`] that receives each event as a
///   field-annotated record.
///
/// **Effects**
///
/// Installs a [`Registry`] combined with [`FacadeLayer`] as the global
/// default subscriber.
///
/// **Returns**
/// - `Err(..)` if a global subscriber was already installed.
pub fn init_tracing(facade: LogFacade) -> Result<(), SetGlobalDefaultError> {
    let subscriber = Registry::default().with(FacadeLayer::new(facade));
    tracing::subscriber::set_global_default(subscriber)
}
