//! Card showing the standardization result of one uploaded file.

use leptos::*;

use crate::types::FileResult;
use crate::view_model::{MappingRow, ResultCardModel};

#[component]
pub fn FileResultCard(result: FileResult) -> impl IntoView {
    let ResultCardModel {
        title,
        header,
        rows,
        mappings,
        warnings,
        errors,
    } = ResultCardModel::from(&result);

    view! {
        <div class="result-card">
            <h2 class="result-title">{title}</h2>

            // Data preview
            <div class="result-block">
                <h3 class="result-subtitle">"File Preview (Header and first 6 rows)"</h3>
                <div class="table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                {header.into_iter().map(|col| view! { <th>{col}</th> }).collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows.into_iter().map(|row| view! {
                                <tr>
                                    {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            // Column mapping
            <div class="result-block">
                <h3 class="result-subtitle">"Standardized Header Mapping"</h3>
                <div class="table-wrap">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Standard Column"</th>
                                <th>"Mapped From"</th>
                                <th>"Match Score"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {mappings.into_iter().map(|MappingRow { standard, mapped_from, score }| view! {
                                <tr>
                                    <td class="standard-column">{standard}</td>
                                    <td>{mapped_from}</td>
                                    <td>{score}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            {warnings.map(|items| view! { <MessageList variant="warning" title="Warnings" items=items/> })}
            {errors.map(|items| view! { <MessageList variant="error" title="Errors" items=items/> })}
        </div>
    }
}

#[component]
fn MessageList(variant: &'static str, title: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{}", variant) role="alert">
            <h4 class="alert-title">{title}</h4>
            <ul class="alert-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
