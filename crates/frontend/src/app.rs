use crate::usecases::u501_calculate_ppe::ui::CalculatorPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <CalculatorPage />
        </ConfigProvider>
    }
}
