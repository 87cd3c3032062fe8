use compute::dashboard::{FetchState, SubmitState};
use compute::Action;
use yew::prelude::*;

use super::chart::SpendingChart;
use crate::components::assistant::ChatPanel;
use crate::components::common::error::ErrorDisplay;
use crate::components::common::loading::Loading;
use crate::components::transactions::{TransactionModal, TransactionTable};
use crate::hooks::use_dashboard;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let handle = use_dashboard();
    let dashboard = handle.state.borrow();

    let transactions = match dashboard.feed() {
        FetchState::NotStarted | FetchState::Loading => {
            return html! { <Loading text={"Loading dashboard...".to_string()} /> };
        }
        FetchState::Error(message) => {
            return html! { <ErrorDisplay message={message.clone()} /> };
        }
        FetchState::Success(transactions) => transactions.clone(),
    };

    let open_modal = {
        let dispatch = handle.dispatch.clone();
        Callback::from(move |_| dispatch.emit(Action::ModalOpened))
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 space-y-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Spending Overview"}</h2>
                        <SpendingChart slices={dashboard.breakdown()} />
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <div class="flex justify-between items-center mb-4">
                            <h2 class="card-title">{"Recent Transactions"}</h2>
                            <button class="btn btn-primary btn-sm" onclick={open_modal}>{"+ Add Transaction"}</button>
                        </div>
                        if dashboard.is_modal_open() {
                            <TransactionModal
                                draft={dashboard.draft().clone()}
                                submitting={dashboard.submit_state() == SubmitState::Submitting}
                                on_action={handle.dispatch.clone()}
                            />
                        }
                        <TransactionTable transactions={transactions} />
                    </div>
                </div>
            </div>

            <aside>
                <ChatPanel
                    conversation={dashboard.chat().clone()}
                    on_action={handle.dispatch.clone()}
                />
            </aside>
        </div>
    }
}
