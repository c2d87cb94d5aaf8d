//! Stable identifiers for checks and resource types.
//!
//! A check `id` is the external tracking identity and must never change across versions.
//! A check `name` is a dotted snake_case handle used in configuration files.

// Resource types
pub const RESOURCE_TYPE_IAM_USER: &str = "AWS::IAM::User";

// Check IDs
pub const CHECK_IAM_USER_ACTIVE_ACCESS_KEY: &str = "28c0fd9a-d92a-4cdb-bef9-19c4b6657721";
pub const CHECK_IAM_USER_INACTIVE_ACCESS_KEY: &str = "9e274ff5-835a-4c1e-ac57-6732516314e4";

// Check names
pub const NAME_IAM_USER_ACTIVE_ACCESS_KEY: &str = "iam_user.active_access_key";
pub const NAME_IAM_USER_INACTIVE_ACCESS_KEY: &str = "iam_user.inactive_access_key";

// Configuration item statuses that mean the resource no longer exists.
pub const ITEM_STATUS_RESOURCE_DELETED: &str = "ResourceDeleted";
pub const ITEM_STATUS_RESOURCE_DELETED_NOT_RECORDED: &str = "ResourceDeletedNotRecorded";
