mod address;
mod check;
mod customize;
pub(crate) mod output;
mod register;
mod whoami;

pub use address::Address;
pub use check::Check;
pub use customize::Customize;
pub use output::RedirectOutput;
pub use register::Register;
pub use whoami::WhoAmI;
