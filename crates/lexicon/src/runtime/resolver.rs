//! The localization facade: resolution, rendering and dispatch.

use std::fmt::Display;
use std::hash::Hash;

use crate::runtime::error::{CatalogError, DispatchError, LoadError};
use crate::runtime::loader::{LanguageLoader, ReceiverDataLoader};
use crate::runtime::receivers::ReceiverRegistry;
use crate::runtime::renderer::{Argument, Renderer, Substitute};
use crate::runtime::settings::Settings;
use crate::runtime::sink::{ConsoleLog, MessageSink, StdoutConsole};
use crate::runtime::store::CatalogStore;
use crate::types::{Catalog, ConsoleLogLevel, Target};

/// Outcome of a send that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// A message was resolved, rendered and handed to the sink.
    Sent,
    /// No message exists for the key; nothing was sent.
    Missing,
}

/// Resolves, renders and dispatches localized messages.
///
/// `Localization` owns the loaded catalogs, the receivers' language
/// preferences and the placeholder renderer. Platform adapters supply a
/// [`MessageSink`] for addressed receivers and optionally a [`ConsoleLog`]
/// for console output.
///
/// Resolution for a receiver uses its stored language, or the default
/// language when none is stored; the console uses the console language. A
/// key missing from that language falls back to the default language once.
/// A missing catalog, or a key missing from both catalogs, resolves to no
/// message.
///
/// # Example
///
/// ```
/// use lexicon::{Catalog, Localization, MemorySink, Settings, messages};
///
/// let sink = MemorySink::new();
/// let mut localization = Localization::<String, u64>::new(Settings::default(), sink.clone());
/// localization
///     .load_languages(&mut vec![
///         Catalog::new("en", messages! { "welcome" => "Welcome, ${1}!" }).unwrap(),
///         Catalog::new("de", messages! { "welcome" => "Willkommen, ${1}!" }).unwrap(),
///     ])
///     .unwrap();
/// localization.set_language(7, "de");
///
/// localization.send_message_with_args(&7, "welcome", &["Ada"]).unwrap();
/// assert_eq!(sink.take(), vec![(7, "Willkommen, Ada!".to_string())]);
/// ```
pub struct Localization<M, R> {
    store: CatalogStore<M>,
    receivers: ReceiverRegistry<R>,
    renderer: Renderer,
    sink: Box<dyn MessageSink<M, R>>,
    console: Box<dyn ConsoleLog<M>>,
}

impl<M, R> Localization<M, R>
where
    M: Substitute + Display,
    R: Eq + Hash,
{
    /// Create a localization whose console messages go to standard output.
    pub fn new(settings: Settings, sink: impl MessageSink<M, R> + 'static) -> Self {
        Self::with_console(settings, sink, StdoutConsole)
    }
}

impl<M, R> Localization<M, R>
where
    M: Substitute,
    R: Eq + Hash,
{
    /// Create a localization with an explicit console log.
    pub fn with_console(
        settings: Settings,
        sink: impl MessageSink<M, R> + 'static,
        console: impl ConsoleLog<M> + 'static,
    ) -> Self {
        let mut store = CatalogStore::new(settings.default_language());
        store.set_console_language(settings.console_language());
        Self {
            store,
            receivers: ReceiverRegistry::new(),
            renderer: Renderer::new(settings.syntax().clone()),
            sink: Box::new(sink),
            console: Box::new(console),
        }
    }

    // =========================================================================
    // Catalogs
    // =========================================================================

    pub fn store(&self) -> &CatalogStore<M> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CatalogStore<M> {
        &mut self.store
    }

    /// Merge catalogs from `loader`, returning the number of loaded languages.
    pub fn load_languages(
        &mut self,
        loader: &mut impl LanguageLoader<M>,
    ) -> Result<usize, LoadError> {
        self.store.load_languages(loader)
    }

    /// Replace all catalogs with the output of `loader`.
    pub fn reload_languages(
        &mut self,
        loader: &mut impl LanguageLoader<M>,
    ) -> Result<usize, LoadError> {
        self.store.reload_languages(loader)
    }

    pub fn put_message(
        &mut self,
        language: &str,
        key: impl Into<String>,
        message: M,
    ) -> Result<Option<M>, CatalogError> {
        self.store.put_message(language, key, message)
    }

    pub fn put_catalog(&mut self, catalog: Catalog<M>) -> Option<Catalog<M>> {
        self.store.put_catalog(catalog)
    }

    pub fn default_language(&self) -> &str {
        self.store.default_language()
    }

    pub fn console_language(&self) -> &str {
        self.store.console_language()
    }

    pub fn set_console_language(&mut self, language: impl Into<String>) {
        self.store.set_console_language(language);
    }

    // =========================================================================
    // Receivers
    // =========================================================================

    pub fn receivers(&self) -> &ReceiverRegistry<R> {
        &self.receivers
    }

    /// The receiver's stored language, without fallback.
    pub fn language(&self, receiver: &R) -> Option<&str> {
        self.receivers.language(receiver)
    }

    pub fn set_language(&mut self, receiver: R, language: impl Into<String>) -> Option<String> {
        self.receivers.set_language(receiver, language)
    }

    pub fn remove_language(&mut self, receiver: &R) -> Option<String> {
        self.receivers.remove_language(receiver)
    }

    pub fn load_receiver_data(
        &mut self,
        loader: &mut impl ReceiverDataLoader<R>,
    ) -> Result<usize, LoadError> {
        self.receivers.load_receiver_data(loader)
    }

    pub fn save_receiver_data(
        &self,
        loader: &mut impl ReceiverDataLoader<R>,
    ) -> Result<(), LoadError> {
        self.receivers.save_receiver_data(loader)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// The language a target's messages are resolved in.
    pub fn language_of(&self, target: Target<'_, R>) -> &str {
        match target {
            Target::Receiver(receiver) => self
                .receivers
                .language(receiver)
                .unwrap_or(self.store.default_language()),
            Target::Console => self.store.console_language(),
        }
    }

    /// Resolve `key` for `target`, with a single fallback to the default language.
    pub fn resolve(&self, target: Target<'_, R>, key: &str) -> Option<&M> {
        self.store.lookup(self.language_of(target), key)
    }

    /// Resolve `key` for a receiver.
    pub fn message(&self, receiver: &R, key: &str) -> Option<&M> {
        self.resolve(Target::Receiver(receiver), key)
    }

    /// Resolve `key` for the console.
    pub fn console_message(&self, key: &str) -> Option<&M> {
        self.resolve(Target::Console, key)
    }

    /// Resolve `key` for `target` and substitute `args`.
    ///
    /// `None` leaves placeholders untouched; an empty slice clears them.
    pub fn render_message<A: Argument>(
        &self,
        target: Target<'_, R>,
        key: &str,
        args: Option<&[A]>,
    ) -> Option<M> {
        self.resolve(target, key)
            .map(|message| self.renderer.render(message, args))
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    // =========================================================================
    // Receiver Dispatch
    // =========================================================================

    /// Hand an already rendered message to the sink.
    pub fn send_translated_message(&mut self, receiver: &R, message: M) -> Result<(), DispatchError> {
        self.sink
            .send(receiver, message)
            .map_err(|source| DispatchError::RejectedTranslated { source })
    }

    /// Send the message for `key` without substituting arguments.
    pub fn send_message(&mut self, receiver: &R, key: &str) -> Result<Delivery, DispatchError> {
        self.send_message_with::<&str>(receiver, key, None, |message| message)
    }

    /// Send the message for `key` with `args` substituted.
    pub fn send_message_with_args<A: Argument>(
        &mut self,
        receiver: &R,
        key: &str,
        args: &[A],
    ) -> Result<Delivery, DispatchError> {
        self.send_message_with(receiver, key, Some(args), |message| message)
    }

    /// Send the message for `key`, substituting `args` and then applying
    /// `transform` to the rendered message.
    pub fn send_message_with<A: Argument>(
        &mut self,
        receiver: &R,
        key: &str,
        args: Option<&[A]>,
        transform: impl FnOnce(M) -> M,
    ) -> Result<Delivery, DispatchError> {
        let Some(rendered) = self.render_message(Target::Receiver(receiver), key, args) else {
            return Ok(Delivery::Missing);
        };

        self.sink
            .send(receiver, transform(rendered))
            .map_err(|source| DispatchError::Rejected {
                key: key.to_string(),
                source,
            })?;
        Ok(Delivery::Sent)
    }

    /// Send the message for `key` to each receiver in turn.
    ///
    /// Stops at the first sink failure. Returns how many messages were sent.
    pub fn send_messages<'r>(
        &mut self,
        key: &str,
        receivers: impl IntoIterator<Item = &'r R>,
    ) -> Result<usize, DispatchError>
    where
        R: 'r,
    {
        let mut sent = 0;
        for receiver in receivers {
            if self.send_message(receiver, key)? == Delivery::Sent {
                sent += 1;
            }
        }
        Ok(sent)
    }

    // =========================================================================
    // Console Dispatch
    // =========================================================================

    /// Replace the console log.
    pub fn set_console_log(&mut self, console: impl ConsoleLog<M> + 'static) {
        self.console = Box::new(console);
    }

    /// Hand an already rendered message to the console log.
    pub fn send_translated_console_message(&mut self, level: ConsoleLogLevel, message: M) {
        self.console.log(level, message);
    }

    /// Log the console message for `key` without substituting arguments.
    pub fn send_console_message(&mut self, level: ConsoleLogLevel, key: &str) -> Delivery {
        self.send_console_message_with::<&str>(level, key, None, |message| message)
    }

    /// Log the console message for `key` with `args` substituted.
    pub fn send_console_message_with_args<A: Argument>(
        &mut self,
        level: ConsoleLogLevel,
        key: &str,
        args: &[A],
    ) -> Delivery {
        self.send_console_message_with(level, key, Some(args), |message| message)
    }

    /// Log the console message for `key`, substituting `args` and then
    /// applying `transform`.
    pub fn send_console_message_with<A: Argument>(
        &mut self,
        level: ConsoleLogLevel,
        key: &str,
        args: Option<&[A]>,
        transform: impl FnOnce(M) -> M,
    ) -> Delivery {
        let Some(rendered) = self.render_message(Target::Console, key, args) else {
            return Delivery::Missing;
        };

        self.console.log(level, transform(rendered));
        Delivery::Sent
    }

    // =========================================================================
    // Target Dispatch
    // =========================================================================

    /// Send the message for `key` to a receiver or to the console.
    ///
    /// Receivers go through the sink and `level` is ignored; the console
    /// logs at `level` and never fails.
    pub fn send_to<A: Argument>(
        &mut self,
        target: Target<'_, R>,
        level: ConsoleLogLevel,
        key: &str,
        args: Option<&[A]>,
        transform: impl FnOnce(M) -> M,
    ) -> Result<Delivery, DispatchError> {
        match target {
            Target::Receiver(receiver) => self.send_message_with(receiver, key, args, transform),
            Target::Console => Ok(self.send_console_message_with(level, key, args, transform)),
        }
    }
}
