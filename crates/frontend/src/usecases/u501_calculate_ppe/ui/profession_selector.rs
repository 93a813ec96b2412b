use super::view_model::CalculatorVm;
use crate::shared::icons::icon;
use contracts::domain::a002_selection::SelectionId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use thaw::*;

/// 1. Выберите профессии
#[component]
pub fn ProfessionSelector(vm: CalculatorVm) -> impl IntoView {
    let no_professions = Signal::derive(move || vm.session.with(|s| s.professions().is_empty()));

    view! {
        <section class="ppe-section">
            <h2 class="ppe-section__title">"1. Выберите профессии"</h2>
            <div class="ppe-selection-list">
                <For
                    each=move || vm.session.with(|s| s.selections().to_vec())
                    key=|selection| selection.id
                    children=move |selection| view! { <SelectionRow vm=vm id=selection.id /> }
                />
            </div>
            <div class="ppe-section__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.add_selection()
                    disabled=no_professions
                >
                    {icon("plus")}
                    " Добавить профессию"
                </Button>
            </div>
        </section>
    }
}

/// Строка выбора. Значения читаются из сеанса по id, потому что смена периода
/// может переписать профессию без пересоздания строки.
#[component]
fn SelectionRow(vm: CalculatorVm, id: SelectionId) -> impl IntoView {
    let profession_name = move || {
        vm.session.with(|s| {
            s.selections()
                .iter()
                .find(|sel| sel.id == id)
                .map(|sel| sel.profession_name.clone())
                .unwrap_or_default()
        })
    };
    let headcount = move || {
        vm.session.with(|s| {
            s.selections()
                .iter()
                .find(|sel| sel.id == id)
                .map(|sel| sel.headcount)
                .unwrap_or_default()
        })
    };
    let profession_names = move || {
        vm.session
            .with(|s| s.professions().iter().map(|p| p.name.clone()).collect::<Vec<_>>())
    };

    let select_id = format!("profession-{}", id.as_string());
    let count_id = format!("count-{}", id.as_string());

    view! {
        <div class="ppe-selection-row">
            <div class="ppe-field ppe-field--grow">
                <label class="ppe-field__label" for=select_id.clone()>"Должность"</label>
                <select
                    id=select_id
                    class="ppe-field__input"
                    on:change=move |ev| vm.set_profession(id, event_target_value(&ev))
                >
                    {move || {
                        let current = profession_name();
                        profession_names()
                            .into_iter()
                            .map(|name| {
                                let selected = name == current;
                                view! {
                                    <option value=name.clone() selected=selected>{name.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="ppe-field">
                <label class="ppe-field__label" for=count_id.clone()>"Кол-во сотрудников"</label>
                <input
                    id=count_id
                    class="ppe-field__input ppe-field__input--count"
                    type="number"
                    min="0"
                    prop:value=move || headcount().to_string()
                    on:input=move |ev| vm.set_headcount(id, &event_target_value(&ev))
                />
            </div>
            <div class="ppe-selection-row__remove">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.remove_selection(id)
                    attr:title="Удалить профессию"
                >
                    {icon("trash")}
                </Button>
            </div>
        </div>
    }
}
