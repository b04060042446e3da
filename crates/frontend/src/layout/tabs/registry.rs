//! Tab content registry - единственный источник правды для маппинга tab.key → View
//!
//! Этот модуль содержит функцию `render_tab_content`, которая по ключу таба
//! возвращает соответствующий View. Ключи разбираются в `nav_key`.

use super::nav_key::{parse_nav_key, NavTarget};
use crate::dashboards::OverviewDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::data_view::{RecordDetailPage, RecordList, RecordView};
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_order::aggregate::Order;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_category::aggregate::Category;
use contracts::domain::a005_payment::aggregate::Payment;
use contracts::domain::a006_complaint::aggregate::Complaint;
use contracts::domain::a007_package::aggregate::Package;
use contracts::domain::a008_policy::aggregate::Policy;
use contracts::domain::a009_ai_model::aggregate::AiModel;
use contracts::domain::a010_site_content::aggregate::SiteContent;
use leptos::logging::log;
use leptos::prelude::*;

/// Список или карточка коллекции `T`, если ключ относится к ней
fn render_collection<T: RecordView>(
    target: &NavTarget,
    key: &str,
    tabs_store: AppGlobalContext,
) -> Option<AnyView> {
    let full_name = T::full_name();
    match target {
        NavTarget::List(collection) if *collection == full_name => {
            log!("✅ Creating list for {}", full_name);
            Some(view! { <RecordList<T> /> }.into_any())
        }
        NavTarget::Detail { collection, id } if *collection == full_name => {
            let key_for_close = key.to_string();
            Some(
                view! {
                    <RecordDetailPage<T>
                        id=id.clone()
                        tab_key=key.to_string()
                        on_close=Callback::new(move |_| {
                            tabs_store.close_tab(&key_for_close);
                        })
                    />
                }
                .into_any(),
            )
        }
        _ => None,
    }
}

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a002_orders", "a002_orders_detail_ORD-1001")
/// * `tabs_store` - контекст для закрытия таба из карточки
///
/// # Returns
/// AnyView с содержимым таба или placeholder для неизвестных ключей
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let target = parse_nav_key(key);

    if target == NavTarget::Dashboard {
        return view! { <OverviewDashboard /> }.into_any();
    }

    render_collection::<User>(&target, key, tabs_store)
        .or_else(|| render_collection::<Order>(&target, key, tabs_store))
        .or_else(|| render_collection::<Product>(&target, key, tabs_store))
        .or_else(|| render_collection::<Category>(&target, key, tabs_store))
        .or_else(|| render_collection::<Payment>(&target, key, tabs_store))
        .or_else(|| render_collection::<Complaint>(&target, key, tabs_store))
        .or_else(|| render_collection::<Package>(&target, key, tabs_store))
        .or_else(|| render_collection::<Policy>(&target, key, tabs_store))
        .or_else(|| render_collection::<AiModel>(&target, key, tabs_store))
        .or_else(|| render_collection::<SiteContent>(&target, key, tabs_store))
        .unwrap_or_else(|| {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Unknown section"}</div> }.into_any()
        })
}
