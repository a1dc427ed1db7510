//! Translation lookup for UI strings.
//!
//! DESIGN
//! ======
//! The string table is static and compiled in. The active language lives in a
//! `Translator` value provided through Leptos context at the app root, so
//! lookups never touch global mutable state. A lookup never fails: it falls
//! back to English, then to the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::util::countdown::Age;

/// `localStorage` key holding the persisted language code.
pub const LANGUAGE_STORAGE_KEY: &str = "marketplace-language";

/// Languages with entries in the string table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    It,
    Es,
}

impl Language {
    pub const ALL: [Self; 4] = [Self::En, Self::Fr, Self::It, Self::Es];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Es => "es",
        }
    }

    /// Parse a two-letter code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Native display name for the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::It => "Italiano",
            Self::Es => "Español",
        }
    }

    fn column(self) -> usize {
        match self {
            Self::En => 0,
            Self::Fr => 1,
            Self::It => 2,
            Self::Es => 3,
        }
    }
}

/// Translation context handed to the view tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    pub language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Look up `key` in the active language.
    ///
    /// Missing or empty entries fall back to English, and a key absent from
    /// the table is returned unchanged.
    pub fn t(&self, key: &str) -> String {
        let Some((_, row)) = TABLE.iter().find(|(k, _)| *k == key) else {
            return key.to_owned();
        };
        let localized = row[self.language.column()];
        if !localized.is_empty() {
            return localized.to_owned();
        }
        if !row[0].is_empty() {
            return row[0].to_owned();
        }
        key.to_owned()
    }

    /// Look up `key` and substitute each `{name}` placeholder with its value.
    pub fn t_args(&self, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| text.replace(&format!("{{{name}}}"), value))
    }

    /// "2h ago" style label in the active language.
    pub fn ago(&self, age: Age) -> String {
        self.t_args(age.label_key(), &[("n", age.count().to_string())])
    }
}

/// Reactive lookup of `key` against the translator context.
pub fn text(i18n: RwSignal<Translator>, key: &'static str) -> impl Fn() -> String + Clone + Send + Sync + 'static {
    move || i18n.with(|t| t.t(key))
}

/// Load the persisted language, defaulting to English.
pub fn load_language() -> Language {
    crate::util::ui_persistence::load_raw(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

/// Persist the language choice.
pub fn save_language(language: Language) {
    crate::util::ui_persistence::save_raw(LANGUAGE_STORAGE_KEY, language.code());
}

// Columns: en, fr, it, es. An empty cell falls back to English.
type Row = [&'static str; 4];

const TABLE: &[(&str, Row)] = &[
    // Navigation
    ("nav.home", ["Home", "Accueil", "Casa", "Inicio"]),
    ("nav.browse", ["Browse", "Parcourir", "Sfoglia", "Explorar"]),
    ("nav.sell", ["Sell", "Vendre", "Vendere", "Vender"]),
    ("nav.account", ["Account", "Compte", "Account", "Cuenta"]),
    ("nav.login", ["Login", "Connexion", "Accesso", "Iniciar sesión"]),
    ("nav.signup", ["Sign Up", "S'inscrire", "Registrati", "Registrarse"]),
    ("nav.logout", ["Logout", "Déconnexion", "Esci", "Cerrar sesión"]),
    ("nav.dashboard", ["Dashboard", "Tableau de bord", "", ""]),
    // Hero
    ("hero.title", [
        "Premium Marketplace for Everything",
        "Marché Premium pour Tout",
        "Mercato Premium per Tutto",
        "Mercado Premium para Todo",
    ]),
    ("hero.subtitle", [
        "Buy, sell, auction, and trade with confidence on our secure platform",
        "Achetez, vendez, enchérissez et échangez en toute confiance sur notre plateforme sécurisée",
        "Compra, vendi, asta e scambia con fiducia sulla nostra piattaforma sicura",
        "Compra, vende, subasta e intercambia con confianza en nuestra plataforma segura",
    ]),
    ("hero.search", [
        "Search for anything...",
        "Rechercher n'importe quoi...",
        "Cerca qualsiasi cosa...",
        "Buscar cualquier cosa...",
    ]),
    // Product actions
    ("product.auction", ["Auction", "Enchère", "Asta", "Subasta"]),
    ("product.buyNow", ["Buy Now", "Acheter maintenant", "Compra ora", "Comprar ahora"]),
    ("product.trade", ["Propose Trade", "Proposer un échange", "Proponi scambio", "Proponer intercambio"]),
    ("product.bid", ["Place Bid", "Placer une enchère", "Fai un'offerta", "Hacer oferta"]),
    ("product.currentBid", ["Current bid", "Enchère actuelle", "Offerta attuale", "Oferta actual"]),
    ("product.minimumBid", ["Minimum bid", "Enchère minimale", "Offerta minima", "Oferta mínima"]),
    ("product.lookingFor", ["Looking for", "Recherche", "Cerca", "Busca"]),
    ("product.estimatedValue", ["Estimated value", "Valeur estimée", "Valore stimato", "Valor estimado"]),
    ("product.notFound", ["Product not found", "Produit introuvable", "Prodotto non trovato", "Producto no encontrado"]),
    ("product.found", ["Products Found", "Produits trouvés", "Prodotti trovati", "Productos encontrados"]),
    // Time
    ("time.ending", ["Ending in", "Se termine dans", "Termina tra", "Termina en"]),
    ("time.ended", ["Ended", "Terminé", "Terminata", "Finalizada"]),
    ("time.days", ["days", "jours", "giorni", "días"]),
    ("time.hours", ["hours", "heures", "ore", "horas"]),
    ("time.minutes", ["minutes", "minutes", "minuti", "minutos"]),
    ("time.minutesAgo", ["{n}m ago", "il y a {n} min", "{n} min fa", "hace {n} min"]),
    ("time.hoursAgo", ["{n}h ago", "il y a {n} h", "{n} h fa", "hace {n} h"]),
    ("time.daysAgo", ["{n}d ago", "il y a {n} j", "{n} g fa", "hace {n} d"]),
    // Categories
    ("category.all", ["All Categories", "Toutes les catégories", "Tutte le categorie", "Todas las categorías"]),
    ("category.electronics", ["Electronics", "Électronique", "Elettronica", "Electrónicos"]),
    ("category.fashion", ["Fashion", "Mode", "Moda", "Moda"]),
    ("category.home", ["Home & Garden", "Maison et Jardin", "Casa e Giardino", "Hogar y Jardín"]),
    ("category.collectibles", ["Collectibles", "Objets de collection", "Oggetti da collezione", "Coleccionables"]),
    ("category.vehicles", ["Vehicles", "Véhicules", "Veicoli", "Vehículos"]),
    ("category.books", ["Books & Media", "", "", ""]),
    ("category.sports", ["Sports & Outdoors", "", "", ""]),
    ("category.toys", ["Toys & Games", "", "", ""]),
    // Listing wizard
    ("listing.create", ["Create Listing", "Créer une annonce", "Crea annuncio", "Crear anuncio"]),
    ("listing.back", ["Back to Browse", "Retour", "Indietro", "Volver"]),
    ("listing.previous", ["Previous", "Précédent", "Indietro", "Anterior"]),
    ("listing.next", ["Next", "Suivant", "Avanti", "Siguiente"]),
    ("listing.publish", ["Publish Listing", "Publier", "Pubblica", "Publicar"]),
    ("step.basics", ["Basic Info", "Informations", "Informazioni", "Información"]),
    ("step.photos", ["Photos", "Photos", "Foto", "Fotos"]),
    ("step.pricing", ["Pricing", "Prix", "Prezzo", "Precio"]),
    ("step.shipping", ["Shipping", "Livraison", "Spedizione", "Envío"]),
    ("step.review", ["Review", "Vérification", "Riepilogo", "Revisión"]),
    ("sell.basicInfo", ["Basic Information", "Informations de base", "Informazioni di base", "Información básica"]),
    ("sell.title", ["Title *", "Titre *", "Titolo *", "Título *"]),
    ("sell.titlePlaceholder", [
        "e.g., iPhone 15 Pro Max 256GB Space Black",
        "ex. : iPhone 15 Pro Max 256 Go Noir sidéral",
        "es. iPhone 15 Pro Max 256GB Nero siderale",
        "p. ej., iPhone 15 Pro Max 256GB Negro espacial",
    ]),
    ("sell.description", ["Description *", "Description *", "Descrizione *", "Descripción *"]),
    ("sell.descriptionPlaceholder", [
        "Describe your item's condition, features, and any important details...",
        "Décrivez l'état, les caractéristiques et les détails importants de votre article...",
        "Descrivi condizioni, caratteristiche e dettagli importanti del tuo articolo...",
        "Describe el estado, las características y los detalles importantes de tu artículo...",
    ]),
    ("sell.characters", ["{n}/{max} characters", "{n}/{max} caractères", "{n}/{max} caratteri", "{n}/{max} caracteres"]),
    ("sell.category", ["Category *", "Catégorie *", "Categoria *", "Categoría *"]),
    ("sell.selectCategory", [
        "Select category",
        "Choisir une catégorie",
        "Seleziona categoria",
        "Selecciona una categoría",
    ]),
    ("sell.condition", ["Condition *", "État *", "Condizione *", "Estado *"]),
    ("sell.selectCondition", ["Select condition", "Choisir l'état", "Seleziona condizione", "Selecciona el estado"]),
    ("sell.listingType", ["Listing Type *", "Type d'annonce *", "Tipo di annuncio *", "Tipo de anuncio *"]),
    ("sell.price", ["Price *", "Prix *", "Prezzo *", "Precio *"]),
    ("sell.startingBid", ["Starting Bid *", "Enchère de départ *", "Offerta iniziale *", "Oferta inicial *"]),
    ("sell.duration", ["Auction Duration *", "Durée de l'enchère *", "Durata dell'asta *", "Duración de la subasta *"]),
    ("sell.tradeFor", [
        "What are you looking for? *",
        "Que recherchez-vous ? *",
        "Cosa stai cercando? *",
        "¿Qué estás buscando? *",
    ]),
    ("sell.tradeForPlaceholder", [
        "Describe what you'd like to trade for...",
        "Décrivez ce que vous aimeriez obtenir en échange...",
        "Descrivi cosa vorresti ricevere in cambio...",
        "Describe lo que te gustaría recibir a cambio...",
    ]),
    ("sell.estimatedValue", ["Estimated Value *", "Valeur estimée *", "Valore stimato *", "Valor estimado *"]),
    ("sell.shippingLocation", [
        "Shipping & Location",
        "Livraison et emplacement",
        "Spedizione e posizione",
        "Envío y ubicación",
    ]),
    ("sell.location", ["Location *", "Emplacement *", "Posizione *", "Ubicación *"]),
    ("sell.locationPlaceholder", ["City, State", "Ville, Région", "Città, Provincia", "Ciudad, Estado"]),
    ("sell.shippingOptions", ["Shipping Options *", "Options de livraison *", "Opzioni di spedizione *", "Opciones de envío *"]),
    ("sell.acceptReturns", [
        "Accept returns within 30 days",
        "Accepter les retours sous 30 jours",
        "Accetta resi entro 30 giorni",
        "Aceptar devoluciones en 30 días",
    ]),
    ("sell.review", ["Review Your Listing", "Vérifiez votre annonce", "Controlla il tuo annuncio", "Revisa tu anuncio"]),
    ("sell.returns30", ["30-day returns", "Retours sous 30 jours", "Resi entro 30 giorni", "Devoluciones en 30 días"]),
    ("sell.noReturns", ["No returns", "Pas de retours", "Nessun reso", "Sin devoluciones"]),
    ("sell.photoCount", ["{n} photo(s)", "{n} photo(s)", "{n} foto", "{n} foto(s)"]),
    ("sell.incomplete", ["Incomplete", "Incomplet", "Incompleto", "Incompleto"]),
    ("sell.mainPhoto", ["Main photo", "Photo principale", "Foto principale", "Foto principal"]),
    ("terms.auction", [
        "Starting at ${bid} for {days} days",
        "À partir de {bid} $ pendant {days} jours",
        "Da {bid} $ per {days} giorni",
        "Desde {bid} $ durante {days} días",
    ]),
    ("terms.trade", [
        "Trade for {item} (est. ${value})",
        "Échange contre {item} (val. est. {value} $)",
        "Scambio con {item} (val. st. {value} $)",
        "Intercambio por {item} (val. est. {value} $)",
    ]),
    // Photo picker
    ("photos.drop", [
        "Drag and drop your photos here",
        "Glissez-déposez vos photos ici",
        "Trascina qui le tue foto",
        "Arrastra y suelta tus fotos aquí",
    ]),
    ("photos.choose", ["Choose Files", "Choisir des fichiers", "Scegli file", "Elegir archivos"]),
    ("photos.count", ["{n} of {max} photos", "{n} sur {max} photos", "{n} di {max} foto", "{n} de {max} fotos"]),
    ("photos.main", ["Main", "Principale", "Principale", "Principal"]),
    ("photos.remove", ["Remove photo", "Retirer la photo", "Rimuovi foto", "Quitar foto"]),
    // Taxonomy labels
    ("condition.new", ["New", "Neuf", "Nuovo", "Nuevo"]),
    ("condition.likeNew", ["Like New", "Comme neuf", "Come nuovo", "Como nuevo"]),
    ("condition.excellent", ["Excellent", "Excellent", "Eccellente", "Excelente"]),
    ("condition.good", ["Good", "Bon", "Buono", "Bueno"]),
    ("condition.fair", ["Fair", "Correct", "Discreto", "Aceptable"]),
    ("condition.poor", ["Poor", "Usé", "Scarso", "Deficiente"]),
    ("type.fixed", ["Fixed Price", "Prix fixe", "Prezzo fisso", "Precio fijo"]),
    ("type.auction", ["Auction", "Enchère", "Asta", "Subasta"]),
    ("type.trade", ["Trade", "Échange", "Scambio", "Intercambio"]),
    ("shipping.standard", [
        "Standard Shipping (5-7 days)",
        "Livraison standard (5-7 jours)",
        "Spedizione standard (5-7 giorni)",
        "Envío estándar (5-7 días)",
    ]),
    ("shipping.express", [
        "Express Shipping (2-3 days)",
        "Livraison express (2-3 jours)",
        "Spedizione express (2-3 giorni)",
        "Envío exprés (2-3 días)",
    ]),
    ("shipping.overnight", [
        "Overnight Shipping",
        "Livraison en 24 h",
        "Spedizione in 24 ore",
        "Envío en 24 horas",
    ]),
    ("shipping.pickup", ["Local Pickup Only", "Retrait sur place uniquement", "Solo ritiro di persona", "Solo recogida local"]),
    // Field labels shared by review, tables and product tabs
    ("field.title", ["Title", "Titre", "Titolo", "Título"]),
    ("field.category", ["Category", "Catégorie", "Categoria", "Categoría"]),
    ("field.condition", ["Condition", "État", "Condizione", "Estado"]),
    ("field.price", ["Price", "Prix", "Prezzo", "Precio"]),
    ("field.terms", ["Terms", "Conditions", "Condizioni", "Condiciones"]),
    ("field.location", ["Location", "Emplacement", "Posizione", "Ubicación"]),
    ("field.shipping", ["Shipping", "Livraison", "Spedizione", "Envío"]),
    ("field.returns", ["Returns", "Retours", "Resi", "Devoluciones"]),
    ("field.photos", ["Photos", "Photos", "Foto", "Fotos"]),
    ("field.status", ["Status", "Statut", "Stato", "Estado"]),
    ("field.seller", ["Seller", "Vendeur", "Venditore", "Vendedor"]),
    ("field.sellerRating", ["Seller rating", "Note du vendeur", "Valutazione venditore", "Valoración del vendedor"]),
    ("field.memberSince", ["Member since", "Membre depuis", "Membro dal", "Miembro desde"]),
    // Product page
    ("detail.description", ["Description", "Description", "Descrizione", "Descripción"]),
    ("detail.details", ["Details", "Détails", "Dettagli", "Detalles"]),
    ("detail.shipping", ["Shipping", "Livraison", "Spedizione", "Envío"]),
    ("detail.bids", ["Bid History", "Historique des enchères", "Cronologia offerte", "Historial de ofertas"]),
    ("detail.views", ["{n} views", "{n} vues", "{n} visualizzazioni", "{n} visitas"]),
    ("detail.watchers", ["{n} watching", "{n} suivent", "{n} osservano", "{n} siguiendo"]),
    ("detail.watch", ["Watch", "Suivre", "Osserva", "Seguir"]),
    ("detail.watching", ["Watching", "Suivi", "Osservato", "Siguiendo"]),
    // Dashboard
    ("dashboard.stat.total", ["Total listings", "Annonces au total", "Annunci totali", "Anuncios totales"]),
    ("dashboard.stat.active", ["Active listings", "Annonces actives", "Annunci attivi", "Anuncios activos"]),
    ("dashboard.stat.sold", ["Items sold", "Articles vendus", "Articoli venduti", "Artículos vendidos"]),
    ("dashboard.stat.fixed", ["Fixed price", "Prix fixe", "Prezzo fisso", "Precio fijo"]),
    ("dashboard.stat.auctions", ["Auctions", "Enchères", "Aste", "Subastas"]),
    ("dashboard.stat.trades", ["Trades", "Échanges", "Scambi", "Intercambios"]),
    ("dashboard.stat.multiPhoto", [
        "Multi-photo listings",
        "Annonces multi-photos",
        "Annunci con più foto",
        "Anuncios con varias fotos",
    ]),
    ("dashboard.stat.photos", ["Photos uploaded", "Photos importées", "Foto caricate", "Fotos subidas"]),
    ("dashboard.stat.purchases", ["Purchases", "Achats", "Acquisti", "Compras"]),
    ("dashboard.stat.unread", ["Unread messages", "Messages non lus", "Messaggi non letti", "Mensajes sin leer"]),
    ("dashboard.tab.listings", ["My Listings", "Mes annonces", "I miei annunci", "Mis anuncios"]),
    ("dashboard.tab.purchases", ["Purchases", "Achats", "Acquisti", "Compras"]),
    ("dashboard.tab.messages", ["Messages", "Messages", "Messaggi", "Mensajes"]),
    ("dashboard.search", [
        "Search your listings...",
        "Rechercher dans vos annonces...",
        "Cerca nei tuoi annunci...",
        "Buscar en tus anuncios...",
    ]),
    ("dashboard.empty", ["No listings yet.", "Aucune annonce pour l'instant.", "Nessun annuncio per ora.", "Aún no hay anuncios."]),
    ("dashboard.noMatches", [
        "No listings match your search.",
        "Aucune annonce ne correspond à votre recherche.",
        "Nessun annuncio corrisponde alla ricerca.",
        "Ningún anuncio coincide con tu búsqueda.",
    ]),
    ("dashboard.markSold", ["Mark sold", "Marquer vendu", "Segna venduto", "Marcar vendido"]),
    ("dashboard.remove", ["Delete", "Supprimer", "Elimina", "Eliminar"]),
    ("dashboard.markRead", ["Mark as read", "Marquer comme lu", "Segna come letto", "Marcar como leído"]),
    ("dashboard.unreadBadge", ["New", "Nouveau", "Nuovo", "Nuevo"]),
    ("dashboard.status.active", ["Active", "Active", "Attivo", "Activo"]),
    ("dashboard.status.sold", ["Sold", "Vendu", "Venduto", "Vendido"]),
    ("dashboard.status.shipped", ["Shipped", "Expédié", "Spedito", "Enviado"]),
    ("dashboard.status.delivered", ["Delivered", "Livré", "Consegnato", "Entregado"]),
    // Common
    ("common.loading", ["Loading...", "Chargement...", "Caricamento...", "Cargando..."]),
    ("common.error", [
        "Something went wrong",
        "Quelque chose s'est mal passé",
        "Qualcosa è andato storto",
        "Algo salió mal",
    ]),
    ("common.retry", ["Try again", "Réessayer", "Riprova", "Intentar de nuevo"]),
];
