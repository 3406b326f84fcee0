use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const API_BASE: &str = "http://127.0.0.1:3000";

#[derive(Clone, PartialEq, Deserialize)]
struct TypeInfo {
    id: i32,
    name: String,
}

#[derive(Clone, PartialEq, Deserialize)]
struct PokemonType {
    id: i32,
    r#type: TypeInfo,
}

#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pokemon {
    id: i32,
    number: i32,
    name: String,
    image_url: Option<String>,
    caught: bool,
    seen: bool,
    types: Vec<PokemonType>,
}

#[derive(Serialize)]
struct UpdateBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    seen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    caught: Option<bool>,
}

#[derive(Clone, Copy, PartialEq)]
enum StatusFilter {
    All,
    Seen,
    Unseen,
    Caught,
}

/// Même prédicat que le filtre du serveur: texte (nom ou numéro, brut ou
/// complété à trois chiffres), statut, et types en ET.
fn matches(p: &Pokemon, recherche: &str, statut: StatusFilter, types: &[String]) -> bool {
    let texte = recherche.to_lowercase();
    let matches_text = texte.is_empty()
        || p.name.to_lowercase().contains(&texte)
        || p.number.to_string().contains(&texte)
        || format!("{:03}", p.number).contains(&texte);

    let matches_status = match statut {
        StatusFilter::All => true,
        StatusFilter::Seen => p.seen,
        StatusFilter::Unseen => !p.seen,
        StatusFilter::Caught => p.caught,
    };

    let matches_types = types
        .iter()
        .all(|demande| p.types.iter().any(|t| t.r#type.name == *demande));

    matches_text && matches_status && matches_types
}

/// Envoie le PATCH puis fusionne l'enregistrement confirmé par numéro.
/// En cas d'échec: trace console, état local inchangé.
fn send_update(pokemons: UseStateHandle<Vec<Pokemon>>, number: i32, body: UpdateBody) {
    spawn_local(async move {
        let req = Request::patch(&format!("{API_BASE}/pokemon/{number}"))
            .json(&body)
            .unwrap();
        match req.send().await {
            Ok(r) if r.ok() => {
                if let Ok(confirme) = r.json::<Pokemon>().await {
                    let fusion: Vec<Pokemon> = pokemons
                        .iter()
                        .map(|p| {
                            if p.number == number {
                                confirme.clone()
                            } else {
                                p.clone()
                            }
                        })
                        .collect();
                    pokemons.set(fusion);
                }
            }
            Ok(r) => gloo_console::error!(format!("Mise à jour refusée ({})", r.status())),
            Err(e) => gloo_console::error!(format!("Erreur requête: {e}")),
        }
    });
}

#[function_component]
pub fn Pokedex() -> Html {
    let pokemons = use_state(Vec::<Pokemon>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None as Option<String>);
    let search = use_state(String::new);
    let status = use_state(|| StatusFilter::All);
    let selected_types = use_state(Vec::<String>::new);

    {
        let pokemons = pokemons.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match Request::get(&format!("{API_BASE}/pokemon")).send().await {
                    Ok(r) => match r.json::<Vec<Pokemon>>().await {
                        Ok(liste) => pokemons.set(liste),
                        Err(e) => error.set(Some(format!("Erreur lecture: {e}"))),
                    },
                    Err(e) => error.set(Some(format!("Erreur requête: {e}"))),
                }
                loading.set(false);
            });
            || {}
        });
    }

    let on_toggle_seen = {
        let pokemons = pokemons.clone();
        Callback::from(move |p: Pokemon| {
            // Décocher "vu" sur un capturé relâche aussi la capture.
            let body = if p.seen && p.caught {
                UpdateBody {
                    seen: Some(false),
                    caught: Some(false),
                }
            } else {
                UpdateBody {
                    seen: Some(!p.seen),
                    caught: None,
                }
            };
            send_update(pokemons.clone(), p.number, body);
        })
    };

    let on_toggle_caught = {
        let pokemons = pokemons.clone();
        Callback::from(move |p: Pokemon| {
            // Capturer force "vu"; relâcher laisse "vu" tel quel.
            let body = if p.caught {
                UpdateBody {
                    seen: None,
                    caught: Some(false),
                }
            } else {
                UpdateBody {
                    seen: Some(true),
                    caught: Some(true),
                }
            };
            send_update(pokemons.clone(), p.number, body);
        })
    };

    let on_reset = {
        let pokemons = pokemons.clone();
        Callback::from(move |_| {
            let pokemons = pokemons.clone();
            spawn_local(async move {
                match Request::post(&format!("{API_BASE}/pokemon/reset")).send().await {
                    Ok(r) if r.ok() => {
                        if let Ok(liste) = r.json::<Vec<Pokemon>>().await {
                            pokemons.set(liste);
                        }
                    }
                    Ok(r) => {
                        gloo_console::error!(format!("Réinitialisation refusée ({})", r.status()))
                    }
                    Err(e) => gloo_console::error!(format!("Erreur requête: {e}")),
                }
            });
        })
    };

    if *loading {
        return html! { <div class="loading">{"Chargement du Pokédex..."}</div> };
    }

    let filtres: Vec<Pokemon> = pokemons
        .iter()
        .filter(|p| matches(p, (*search).as_str(), *status, (*selected_types).as_slice()))
        .cloned()
        .collect();
    let vus = pokemons.iter().filter(|p| p.seen).count();
    let captures = pokemons.iter().filter(|p| p.caught).count();
    let mut tous_les_types: Vec<String> = pokemons
        .iter()
        .flat_map(|p| p.types.iter().map(|t| t.r#type.name.clone()))
        .collect();
    tous_les_types.sort();
    tous_les_types.dedup();

    html! {
        <section class="pokedex">
            <div class="stats">
                <span>{ format!("Vus: {vus}/151") }</span>
                <span>{ format!("Capturés: {captures}/151") }</span>
                <button class="reset-btn" onclick={on_reset}>{"Tout réinitialiser"}</button>
            </div>

            if let Some(err) = &*error {
                <p class="error">{ err }</p>
            }

            <div class="search-controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Rechercher par nom ou numéro..."
                    value={(*search).clone()}
                    oninput={{ let search = search.clone(); Callback::from(move |e: InputEvent| { if let Some(t) = e.target_dyn_into::<web_sys::HtmlInputElement>() { search.set(t.value()); } }) }}
                />

                <div class="type-filter-section">
                    <div class="type-filter-label">
                        { if selected_types.is_empty() {
                            "Filtrer par type".to_string()
                        } else {
                            format!("Filtrer par type ({} sélectionnés)", selected_types.len())
                        } }
                    </div>
                    <div class="type-filter-buttons">
                        <button
                            class={classes!("type-filter-btn", "clear-all-btn", selected_types.is_empty().then_some("active"))}
                            onclick={{ let selected_types = selected_types.clone(); Callback::from(move |_| selected_types.set(Vec::new())) }}
                        >
                            {"Tout effacer"}
                        </button>
                        { for tous_les_types.iter().map(|nom| {
                            let actif = selected_types.contains(nom);
                            let nom_clique = nom.clone();
                            let selected_types = selected_types.clone();
                            html! {
                                <button
                                    key={nom.clone()}
                                    class={classes!("type-filter-btn", format!("type-{nom}"), actif.then_some("active"))}
                                    onclick={Callback::from(move |_| {
                                        let mut prochains = (*selected_types).clone();
                                        if let Some(pos) = prochains.iter().position(|t| t == &nom_clique) {
                                            prochains.remove(pos);
                                        } else {
                                            prochains.push(nom_clique.clone());
                                        }
                                        selected_types.set(prochains);
                                    })}
                                >
                                    { nom.clone() }
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="filter-buttons">
                    <button
                        class={classes!("filter-btn", (*status == StatusFilter::All).then_some("active"))}
                        onclick={{ let status = status.clone(); Callback::from(move |_| status.set(StatusFilter::All)) }}
                    >
                        { format!("Tous ({})", pokemons.len()) }
                    </button>
                    <button
                        class={classes!("filter-btn", (*status == StatusFilter::Seen).then_some("active"))}
                        onclick={{ let status = status.clone(); Callback::from(move |_| status.set(StatusFilter::Seen)) }}
                    >
                        { format!("Vus ({vus})") }
                    </button>
                    <button
                        class={classes!("filter-btn", (*status == StatusFilter::Unseen).then_some("active"))}
                        onclick={{ let status = status.clone(); Callback::from(move |_| status.set(StatusFilter::Unseen)) }}
                    >
                        { format!("Non vus ({})", pokemons.len() - vus) }
                    </button>
                    <button
                        class={classes!("filter-btn", (*status == StatusFilter::Caught).then_some("active"))}
                        onclick={{ let status = status.clone(); Callback::from(move |_| status.set(StatusFilter::Caught)) }}
                    >
                        { format!("Capturés ({captures})") }
                    </button>
                </div>
            </div>

            <div class="pokemon-grid">
                { for filtres.iter().map(|p| {
                    let pour_vu = p.clone();
                    let pour_capture = p.clone();
                    let on_seen = on_toggle_seen.clone();
                    let on_caught = on_toggle_caught.clone();
                    html! {
                        <div
                            key={p.number.to_string()}
                            class={classes!("pokemon-card", (!p.seen).then_some("unseen"), p.caught.then_some("caught"))}
                        >
                            <div class="pokemon-number">{ format!("#{:03}", p.number) }</div>

                            <div class="pokemon-image-container">
                                <img
                                    class="pokemon-image"
                                    src={p.image_url.clone().unwrap_or_default()}
                                    alt={ if p.seen { p.name.clone() } else { "???".to_string() } }
                                />
                            </div>

                            <div class="pokemon-info">
                                <h3 class="pokemon-name">{ if p.seen { p.name.clone() } else { "???".to_string() } }</h3>
                                <div class="pokemon-types">
                                    { for p.types.iter().filter(|_| p.seen).map(|t| html! {
                                        <span key={t.id.to_string()} class={format!("type-badge type-{}", t.r#type.name)}>
                                            { t.r#type.name.clone() }
                                        </span>
                                    }) }
                                </div>
                            </div>

                            <div class="pokemon-actions">
                                <button
                                    class={classes!("btn", "btn-seen", p.seen.then_some("active"))}
                                    onclick={Callback::from(move |_| on_seen.emit(pour_vu.clone()))}
                                >
                                    { if p.seen { "Vu" } else { "Marquer vu" } }
                                </button>
                                <button
                                    class={classes!("btn", "btn-caught", p.caught.then_some("active"))}
                                    onclick={Callback::from(move |_| on_caught.emit(pour_capture.clone()))}
                                >
                                    { if p.caught { "Capturé" } else { "Capturer" } }
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
