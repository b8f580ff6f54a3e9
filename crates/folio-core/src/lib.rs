//! Core of the Folio portfolio.
//!
//! Everything here is independent of the UI toolkit: owned timers, the
//! splash and role state machines, the scroll reveal state machine, typed
//! animation presets, the project listing client and the contact relay.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_core::splash::{start_splash, SplashConfig};
//!
//! let task = start_splash(
//!     SplashConfig::default(),
//!     |frame| println!("{frame}"),
//!     || println!("ready"),
//! );
//! // dropping `task` before completion cancels the sequence
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod motion;
pub mod projects;
pub mod resume;
pub mod reveal;
pub mod roles;
pub mod schedule;
pub mod splash;

pub use config::{GithubConfig, RelayConfig, RelayCredentials, SiteConfig, TimingConfig};
pub use contact::{ContactForm, EmailJsRelay, Field, FormDraft, MailRelay, Notice};
pub use error::{AssetError, ConfigError, FetchError, FolioError, Result, SubmitError};
pub use motion::{Motion, Pose, Stagger, Transition};
pub use projects::{FeedState, GithubClient, Listing, PageCursor, Paging, Project, ProjectFeed, RepoSource};
pub use resume::{RESUME_FILE_NAME, ResumeAsset};
pub use reveal::{RevealConfig, RevealMachine, RevealMode, Visibility};
pub use roles::{RoleCycle, start_cycler};
pub use schedule::{CancelFlag, ScheduledTask, Tick};
pub use splash::{SplashConfig, Typewriter, start_splash};
