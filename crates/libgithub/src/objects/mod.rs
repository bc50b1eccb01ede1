mod actor_kind;
mod any_node;
mod authenticated_user;
mod bot;
mod issue_comment;
mod license;
mod license_rule;
mod locate;
mod organization;
mod repository;
mod repository_owner_kind;
mod user;
mod user_account;

pub use actor_kind::ActorKind;
pub use any_node::AnyNode;
pub use authenticated_user::AuthenticatedUser;
pub use bot::BOT;
pub use bot::Bot;
pub use issue_comment::ISSUE_COMMENT;
pub use issue_comment::IssueComment;
pub use license::LICENSE;
pub use license::License;
pub use license_rule::LICENSE_RULE;
pub use license_rule::LicenseRule;
pub use organization::ORGANIZATION;
pub use organization::Organization;
pub use repository::REPOSITORY;
pub use repository::Repository;
pub use repository_owner_kind::RepositoryOwnerKind;
pub use user::USER;
pub use user::User;
pub use user_account::UserAccount;
