use super::api;
use crate::shared::icons::icon;
use crate::usecases::u501_calculate_ppe::ui::view_model::CalculatorVm;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_import_norms::ImportNorms;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

/// Загрузка документа с нормами. Полученный список профессий заменяет
/// нормы выбранного периода (или добавляет новый период).
#[component]
pub fn NormsImport(vm: CalculatorVm) -> impl IntoView {
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(None::<String>);
    let (period, set_period) = signal(String::new());
    let (is_importing, set_is_importing) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    // Период по умолчанию: активный период калькулятора
    let active_period = Memo::new(move |_| vm.session.with(|s| s.active_period().to_string()));
    Effect::new(move |_| set_period.set(active_period.get()));

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        set_file_name.set(file.as_ref().map(|f| f.name()));
        selected_file.set_value(file);
        set_error.set(None);
        set_notice.set(None);
    };

    let handle_import = move |_| {
        let Some(file) = selected_file.get_value() else {
            set_error.set(Some("Выберите файл с нормами".to_string()));
            return;
        };
        let target_period = period.get().trim().to_string();
        if target_period.is_empty() {
            set_error.set(Some("Укажите период норм".to_string()));
            return;
        }

        set_is_importing.set(true);
        set_error.set(None);
        set_notice.set(None);

        spawn_local(async move {
            match api::import_norms(file, &target_period).await {
                Ok(response) => {
                    set_notice.set(Some(format!(
                        "Нормы периода \"{}\" обновлены: профессий {}",
                        response.period,
                        response.professions.len()
                    )));
                    vm.replace_catalog(&response.period, response.professions);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_importing.set(false);
        });
    };

    view! {
        <section class="ppe-section ppe-import">
            <h2 class="ppe-section__title">{ImportNorms::display_name()}</h2>
            <Flex align=FlexAlign::End gap=FlexGap::Medium>
                <div class="ppe-field">
                    <label class="button button--secondary" for="norms-file-input">
                        {icon("file")}
                        " Выбрать файл"
                    </label>
                    <input
                        id="norms-file-input"
                        type="file"
                        accept=".txt,.csv,.md,.pdf"
                        on:change=handle_file_select
                        class="hidden"
                    />
                    <span class="ppe-import__file">
                        {move || file_name.get().unwrap_or_else(|| "Файл не выбран".to_string())}
                    </span>
                </div>
                <div class="ppe-field ppe-field--grow">
                    <label class="ppe-field__label" for="norms-period-input">"Период"</label>
                    <input
                        id="norms-period-input"
                        class="ppe-field__input"
                        list="norms-periods"
                        prop:value=move || period.get()
                        on:input=move |ev| set_period.set(event_target_value(&ev))
                    />
                    <datalist id="norms-periods">
                        {move || vm.session.with(|s| s.periods()).into_iter()
                            .map(|p| view! { <option value=p></option> })
                            .collect_view()}
                    </datalist>
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_import
                    disabled=Signal::derive(move || is_importing.get() || file_name.get().is_none())
                >
                    {icon("upload")}
                    {move || if is_importing.get() { " Загрузка..." } else { " Загрузить нормы" }}
                </Button>
            </Flex>

            {move || error.get().map(|e| {
                view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                }
            })}
            {move || notice.get().map(|n| view! { <div class="ppe-import__notice">{n}</div> })}
        </section>
    }
}
