use super::{Locale, DEFAULT_LOCALE};
use std::{collections::HashMap, sync::OnceLock};

type Messages = HashMap<&'static str, &'static str>;

static CATALOG: OnceLock<HashMap<Locale, Messages>> = OnceLock::new();

const EN: &[(&str, &str)] = &[
    ("common.hello", "Hello!"),
    ("auth.login.title", "Sign in"),
    ("auth.form.email", "Email"),
    ("auth.form.password", "Password"),
    ("auth.actions.submit", "Sign in"),
    ("auth.actions.submitting", "Signing in..."),
    ("auth.social.or", "Or continue with"),
    ("auth.social.google", "Continue with Google"),
    ("auth.social.facebook", "Continue with Facebook"),
    ("auth.links.toSignup", "Don't have an account? Sign up"),
    (
        "auth.errors.notConfigured",
        "Sign-in is not available yet. Please try again later.",
    ),
    ("auth.errors.generic", "Something went wrong. Please try again."),
];

const FR: &[(&str, &str)] = &[
    ("common.hello", "Bonjour !"),
    ("auth.login.title", "Connexion"),
    ("auth.form.email", "E-mail"),
    ("auth.form.password", "Mot de passe"),
    ("auth.actions.submit", "Se connecter"),
    ("auth.actions.submitting", "Connexion en cours..."),
    ("auth.social.or", "Ou continuer avec"),
    ("auth.social.google", "Continuer avec Google"),
    ("auth.social.facebook", "Continuer avec Facebook"),
    ("auth.links.toSignup", "Pas encore de compte ? Inscrivez-vous"),
    (
        "auth.errors.notConfigured",
        "La connexion n'est pas encore disponible. Veuillez réessayer plus tard.",
    ),
    (
        "auth.errors.generic",
        "Une erreur est survenue. Veuillez réessayer.",
    ),
];

fn catalog() -> &'static HashMap<Locale, Messages> {
    CATALOG.get_or_init(|| {
        HashMap::from([
            (Locale::En, EN.iter().copied().collect()),
            (Locale::Fr, FR.iter().copied().collect()),
        ])
    })
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    catalog().get(&locale)?.get(key).copied()
}

/// Translate `key` for `locale`, falling back to English and then to the key.
#[must_use]
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    match lookup(locale, key).or_else(|| lookup(DEFAULT_LOCALE, key)) {
        Some(message) => message,
        None => key,
    }
}
