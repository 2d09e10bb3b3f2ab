use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::dashboards::d400_catalog_summary::api::fetch_summary;
use crate::dashboards::d400_catalog_summary::state::DashboardState;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form::UiDispatcher;
use crate::shared::icons::icon;
use crate::shared::lifetime::PageLifetime;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::service::{app_client, Resource};

/// Home page: one card per collection with its record count
#[component]
pub fn CatalogSummaryDashboard() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let lifetime = PageLifetime::for_current_owner();
    let dispatcher = UiDispatcher::new();

    state.update(|s| s.begin_load());
    spawn_local(async move {
        let result = fetch_summary(&app_client()).await;
        if !lifetime.is_alive() {
            return;
        }
        let commands = state.try_update(|s| s.apply(result)).unwrap_or_default();
        dispatcher.run(commands);
    });

    let count = move |resource: Resource| {
        let s = state.get();
        if s.loading {
            return "Loading...".to_string();
        }
        match resource {
            Resource::Product => s.summary.products,
            Resource::ProductCategory => s.summary.categories,
            Resource::ProductVariant => s.summary.variants,
        }
        .to_string()
    };

    view! {
        <PageFrame page_id="d400_catalog_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader title="Dashboard" subtitle="Ringkasan katalog".to_string() />
            </div>
            <div class="page__content">
                <div class="summary-grid">
                    {Resource::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(i, resource)| {
                            view! {
                                <CardAnimated delay_ms=(i as u32) * 80>
                                    <A href=resource.list_route() attr:class="summary-card">
                                        <div class="summary-card__icon">{icon(resource.icon())}</div>
                                        <div class="summary-card__body">
                                            <div class="summary-card__title">{resource.title()}</div>
                                            <div class="summary-card__value">
                                                {move || count(resource)}
                                            </div>
                                        </div>
                                    </A>
                                </CardAnimated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
