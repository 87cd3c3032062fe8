use common::Category;
use compute::dashboard::{DraftField, TransactionDraft};
use compute::Action;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    pub draft: TransactionDraft,
    pub submitting: bool,
    pub on_action: Callback<Action>,
}

fn input_edit(on_action: &Callback<Action>, field: fn(String) -> DraftField) -> Callback<InputEvent> {
    let on_action = on_action.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_action.emit(Action::DraftEdited(field(input.value())));
    })
}

#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let on_submit = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_action.emit(Action::DraftSubmitted);
        })
    };

    let on_close = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(Action::ModalDismissed))
    };

    let on_category = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_action.emit(Action::DraftEdited(DraftField::Category(select.value())));
        })
    };

    let draft = &props.draft;

    html! {
        <dialog class="modal modal-open" id="transaction_modal">
            <div class="modal-box w-11/12 max-w-2xl">
                <h3 class="font-bold text-lg">{"Add New Transaction"}</h3>
                <form onsubmit={on_submit} class="py-4 space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Date"}</span></label>
                        <input type="date" name="date" class="input input-bordered w-full"
                            value={draft.date.clone()} required={true}
                            oninput={input_edit(&props.on_action, DraftField::Date)} />
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">{"Description"}</span></label>
                        <input type="text" name="description" class="input input-bordered w-full"
                            placeholder="e.g. Grocery Store" value={draft.description.clone()} required={true}
                            oninput={input_edit(&props.on_action, DraftField::Description)} />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Amount"}</span></label>
                            <input type="number" step="0.01" name="amount" class="input input-bordered w-full"
                                placeholder="0.00" value={draft.amount.clone()} required={true}
                                oninput={input_edit(&props.on_action, DraftField::Amount)} />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Category"}</span></label>
                            <select name="category" class="select select-bordered w-full" required={true} onchange={on_category}>
                                <option value="" selected={draft.category.is_empty()}>{"Select a category..."}</option>
                                { for Category::SELECTABLE.iter().map(|c| html! {
                                    <option value={c.label()} selected={draft.category == c.label()}>{c.label()}</option>
                                })}
                            </select>
                        </div>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" onclick={on_close}>{"Cancel"}</button>
                        <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                            {if props.submitting { "Saving..." } else { "Add Transaction" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
