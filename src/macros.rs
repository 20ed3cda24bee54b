//! Macros for ergonomic event dispatch.

/// Generate an extension trait with one method per event name.
///
/// Each generated method forwards to [`Machine::emit`](crate::Machine::emit)
/// with the method's name as the event. The methods are a convenience
/// only: dispatch is still decided by the current state at call time.
///
/// # Example
///
/// ```
/// use ssm::{event_triggers, Machine};
///
/// event_triggers! {
///     pub trait DoorEvents {
///         open,
///         close,
///     }
/// }
///
/// let mut machine: Machine = Machine::new();
/// machine
///     .state("closed")
///     .on("open", "opened")?
///     .state("opened")
///     .on("close", "closed")?
///     .initialize("closed")?;
///
/// machine.open(&[])?;
/// assert_eq!(machine.current()?, "opened");
///
/// machine.close(&[])?;
/// assert_eq!(machine.current()?, "closed");
/// # Ok::<(), ssm::Error>(())
/// ```
#[macro_export]
macro_rules! event_triggers {
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident {
            $(
                $(#[$event_meta:meta])*
                $event:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis trait $name<A> {
            $(
                $(#[$event_meta])*
                fn $event(&mut self, args: &[A]) -> $crate::Result<&mut Self>;
            )*
        }

        impl<A: 'static> $name<A> for $crate::Machine<A> {
            $(
                fn $event(&mut self, args: &[A]) -> $crate::Result<&mut Self> {
                    self.emit(stringify!($event), args)
                }
            )*
        }
    };
}
