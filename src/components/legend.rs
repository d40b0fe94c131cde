use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0; font-size:12px;"> <span style={format!("display:inline-block; width:14px; height:3px; background:{}; border-radius:2px;", props.color)}></span> <span>{ props.label }</span> </div> }
}
