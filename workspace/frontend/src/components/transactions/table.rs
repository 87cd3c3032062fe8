use common::TransactionDto;
use compute::format::{badge_class, category_label, format_currency};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub transactions: Vec<TransactionDto>,
}

/// Transactions in feed order, amounts shown unsigned.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th>{"Description"}</th>
                        <th>{"Category"}</th>
                        <th class="text-right">{"Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.transactions.iter().map(|t| {
                        let category = t.category.as_deref();
                        html! {
                            <tr class="hover" key={t.id}>
                                <td class="whitespace-nowrap">{t.date.format("%Y-%m-%d").to_string()}</td>
                                <td class="font-medium">{&t.description}</td>
                                <td><span class={badge_class(category)}>{category_label(category)}</span></td>
                                <td class="font-mono text-right">{format_currency(t.amount)}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}
