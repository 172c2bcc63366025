//! Global allocator.
//!
//! The binary links mimalloc in place of the system allocator; the library
//! leaves the choice to whoever embeds it.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
