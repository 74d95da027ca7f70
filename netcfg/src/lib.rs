//! Multi-chain network configuration resolver.
//!
//! `netcfg` turns a static chain registry plus a handful of
//! environment-supplied secrets into the per-chain connection parameters a
//! deploy/test tool needs: the RPC endpoint for each supported chain, the
//! signer credentials to use, and the parameters for a local development
//! chain that can optionally fork a remote chain at a pinned block.
//!
//! Resolution is synchronous, runs once per process, and fails fast on
//! misconfiguration — no partial configuration is ever returned. The entry
//! point is [`resolver::Resolver`]:
//!
//! ```no_run
//! use netcfg::env::EnvValues;
//! use netcfg::resolver::Resolver;
//!
//! let env = EnvValues::from_process()?;
//! let networks = Resolver::new(env).resolve()?;
//! # Ok::<(), netcfg::error::Error>(())
//! ```

pub mod chain;
pub mod credentials;
pub mod endpoint;
pub mod env;
pub mod error;
pub mod fork;
pub mod resolver;
