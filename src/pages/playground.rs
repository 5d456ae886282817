//! Playground Page
//!
//! All demo cards on one themed grid.

use leptos::prelude::*;

use crate::components::{
    ChildrenDemo, ContextDemo, CounterDemo, EffectDemo, ErrorBoundaryDemo, Footer, FormDemo, Grid, Header,
    LazyDemo, LogPanel, MemoCallbackDemo, Page, PortalDemo, PropsDemo, ReducerDemo, RefDemo, StateDemo,
};

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    view! {
        <Page>
            <Header />
            <Grid>
                <PropsDemo title="Leptos Playground">
                    <span class="tag">"#components"</span>
                    <span class="tag">"#props"</span>
                </PropsDemo>
                <StateDemo />
                <EffectDemo />
                <FormDemo />
                <RefDemo />
                <ReducerDemo />
                <CounterDemo />
                <MemoCallbackDemo />
                <ContextDemo />
                <ChildrenDemo />
                <PortalDemo />
                <ErrorBoundaryDemo />
                <LazyDemo />
                <LogPanel />
            </Grid>
            <Footer />
        </Page>
    }
}
