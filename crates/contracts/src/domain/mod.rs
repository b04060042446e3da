pub mod a001_user;
pub mod a002_order;
pub mod a003_product;
pub mod a004_category;
pub mod a005_payment;
pub mod a006_complaint;
pub mod a007_package;
pub mod a008_policy;
pub mod a009_ai_model;
pub mod a010_site_content;
pub mod badges;
pub mod common;
