//! Domain entities

pub mod asset;
pub mod license;
pub mod question;
pub mod score;
pub mod snapshot;

pub use asset::{AssetId, ContentType, IpAsset, License, LicenseId, NewAsset, NewLicense};
pub use license::LicenseTerms;
pub use question::{question_catalog, AnswerValue, Answers, Question, QuestionKind};
pub use score::{Grade, ScoreResult};
pub use snapshot::{Platform, SocialSnapshot};
