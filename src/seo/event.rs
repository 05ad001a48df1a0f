// src/seo/event.rs
//! # Event Metadata Builder
//! Pure transform from one catalogue stream to its full metadata document.
//! No I/O; every section is a function of the stream, its owning category
//! and the static site configuration, so it unit-tests offline.

use crate::config::{SiteConfig, BING_KEYWORD_N, KEYWORD_HEAD_N, PRIMARY_KEYWORDS};
use crate::locale::{self, DateParts};
use crate::matchup::EventKind;
use crate::seo::types::*;
use crate::slug::slugify;
use crate::source::{SourceCategory, SourceStream};

pub fn build_event(
    stream: &SourceStream,
    category: &SourceCategory,
    cfg: &SiteConfig,
    now: i64,
) -> EventMetadata {
    // 1) Derived inputs every section shares
    let starts = locale::format_date(stream.starts_at);
    let ends = locale::format_date(stream.ends_at);
    let slug = slugify(&stream.name);
    let category_display = locale::translate_category(&stream.category_name);
    let category_slug = slugify(&category_display);
    let kind = EventKind::parse(&stream.name);

    let canonical_url = format!("{}/evento/{}", cfg.domain, stream.uri_name);
    let category_url = format!("{}/categoria/{}", cfg.domain, category_slug);
    let always_live = stream.always_live.unwrap_or(false) || category.always_live;

    // 2) Independent sections, assembled in priority order
    let meta = build_meta(stream, &kind, &starts, &category_display, cfg);
    let og = build_og(stream, &starts, &canonical_url, cfg);
    let twitter = build_twitter(stream, &starts, cfg);
    let schema = build_schema(stream, &kind, &starts, &ends, &canonical_url, cfg);
    let seo = build_seo_blocks(
        stream,
        &kind,
        &starts,
        &category_display,
        &category_url,
        &canonical_url,
        cfg,
    );
    let event = build_facts(
        stream,
        &kind,
        &starts,
        &ends,
        &category_display,
        &category_slug,
        now,
    );
    let technical = build_technical(always_live, &canonical_url);
    let bing = BingHints {
        market: "es-ES".to_string(),
        keywords: meta.keywords.iter().take(BING_KEYWORD_N).cloned().collect(),
    };

    EventMetadata {
        id: stream.id,
        slug,
        uri_name: stream.uri_name.clone(),
        canonical_url,
        meta,
        og,
        twitter,
        schema,
        seo,
        event,
        technical,
        bing,
    }
}

fn build_meta(
    stream: &SourceStream,
    kind: &EventKind,
    starts: &DateParts,
    category_display: &str,
    cfg: &SiteConfig,
) -> MetaTags {
    let title = match kind.participants() {
        Some((home, away)) => format!(
            "{home} vs {away} En Vivo Online Gratis - {} | {}",
            starts.long, cfg.site_name
        ),
        None => format!(
            "{} En Vivo Online Gratis - {} | {}",
            stream.name, starts.long, cfg.site_name
        ),
    };

    let description = match kind.participants() {
        Some((home, away)) => format!(
            "Ver {home} vs {away} en vivo y en directo gratis. {category_display} el {} a las {} \
             (hora de España). Transmisión {} en HD, sin registro.",
            starts.long, starts.time, stream.tag
        ),
        None => format!(
            "Ver {} en vivo online gratis. {category_display} en directo el {} a las {} \
             (hora de España). Señal {} en HD, sin registro.",
            stream.name, starts.long, starts.time, stream.tag
        ),
    };

    let mut keywords: Vec<String> = PRIMARY_KEYWORDS
        .iter()
        .take(KEYWORD_HEAD_N)
        .cloned()
        .collect();
    keywords.push(stream.name.to_lowercase());
    if let Some((home, away)) = kind.participants() {
        keywords.push(home.to_lowercase());
        keywords.push(away.to_lowercase());
        keywords.push(format!("{} vs {}", home.to_lowercase(), away.to_lowercase()));
    }
    keywords.push(stream.category_name.to_lowercase());
    keywords.push(category_display.to_lowercase());
    keywords.push(format!("{} en vivo", stream.name.to_lowercase()));
    keywords.push(format!("ver {} online", stream.name.to_lowercase()));
    keywords.push(format!("donde ver {}", stream.name.to_lowercase()));
    if !stream.tag.is_empty() {
        keywords.push(stream.tag.to_lowercase());
    }
    keywords.push(starts.short.clone());

    MetaTags {
        title,
        description,
        keywords,
        robots: "index, follow".to_string(),
        viewport: "width=device-width, initial-scale=1".to_string(),
        language: cfg.language.clone(),
        locale: cfg.locale.clone(),
    }
}

fn build_og(
    stream: &SourceStream,
    starts: &DateParts,
    canonical_url: &str,
    cfg: &SiteConfig,
) -> OpenGraph {
    OpenGraph {
        title: format!("🔴 {} En Vivo", stream.name),
        description: format!(
            "Mira {} en directo · {} · {} (hora de España)",
            stream.name, starts.long, starts.time
        ),
        og_type: "video.other".to_string(),
        url: canonical_url.to_string(),
        image: stream.poster.clone(),
        site_name: cfg.site_name.clone(),
        locale: cfg.locale.clone(),
    }
}

fn build_twitter(stream: &SourceStream, starts: &DateParts, cfg: &SiteConfig) -> TwitterCard {
    TwitterCard {
        card: "summary_large_image".to_string(),
        title: format!("📺 {} En Vivo Gratis", stream.name),
        description: format!(
            "{} en directo el {} a las {}. Sin registro.",
            stream.name, starts.short, starts.time
        ),
        image: stream.poster.clone(),
        site: cfg.twitter_site.clone(),
    }
}

fn build_schema(
    stream: &SourceStream,
    kind: &EventKind,
    starts: &DateParts,
    ends: &DateParts,
    canonical_url: &str,
    cfg: &SiteConfig,
) -> SportsEventSchema {
    let (competitor, home_team, away_team) = match kind.participants() {
        Some((home, away)) => (
            vec![SportsTeam::named(home), SportsTeam::named(away)],
            Some(SportsTeam::named(home)),
            Some(SportsTeam::named(away)),
        ),
        None => (Vec::new(), None, None),
    };

    SportsEventSchema {
        context: "https://schema.org".to_string(),
        schema_type: "SportsEvent".to_string(),
        name: stream.name.clone(),
        description: format!(
            "{} en vivo el {} a las {} (hora de España)",
            stream.name, starts.long, starts.time
        ),
        start_date: starts.iso.clone(),
        end_date: ends.iso.clone(),
        event_status: "https://schema.org/EventScheduled".to_string(),
        event_attendance_mode: "https://schema.org/OnlineEventAttendanceMode".to_string(),
        location: VirtualLocation {
            schema_type: "VirtualLocation".to_string(),
            url: canonical_url.to_string(),
        },
        organizer: Organizer {
            schema_type: "Organization".to_string(),
            name: cfg.site_name.clone(),
            url: cfg.domain.clone(),
        },
        image: stream.poster.clone(),
        competitor,
        home_team,
        away_team,
    }
}

fn build_seo_blocks(
    stream: &SourceStream,
    kind: &EventKind,
    starts: &DateParts,
    category_display: &str,
    category_url: &str,
    canonical_url: &str,
    cfg: &SiteConfig,
) -> SeoBlocks {
    let breadcrumbs = vec![
        Breadcrumb {
            position: 1,
            name: "Inicio".to_string(),
            url: cfg.domain.clone(),
        },
        Breadcrumb {
            position: 2,
            name: category_display.to_string(),
            url: category_url.to_string(),
        },
        Breadcrumb {
            position: 3,
            name: stream.name.clone(),
            url: canonical_url.to_string(),
        },
    ];

    let mut faq = vec![
        FaqEntry {
            question: format!("¿A qué hora empieza {}?", stream.name),
            answer: format!(
                "El evento comienza el {} a las {} (hora de España).",
                starts.long, starts.time
            ),
        },
        FaqEntry {
            question: format!("¿Dónde puedo ver {} en vivo?", stream.name),
            answer: format!(
                "Puedes ver {} en vivo y gratis en {}, sin necesidad de registro.",
                stream.name, cfg.site_name
            ),
        },
        FaqEntry {
            question: format!("¿Es gratis ver {}?", stream.name),
            answer: "Sí, la transmisión es totalmente gratuita y no requiere suscripción."
                .to_string(),
        },
        FaqEntry {
            question: format!("¿En qué canal transmiten {}?", stream.name),
            answer: if stream.tag.is_empty() {
                "La señal se publica en nuestra página del evento minutos antes del inicio."
                    .to_string()
            } else {
                format!("La señal proviene de {}.", stream.tag)
            },
        },
        FaqEntry {
            question: format!("¿Puedo ver {} desde el móvil?", stream.name),
            answer: "Sí, el reproductor es compatible con móviles, tablets y ordenadores."
                .to_string(),
        },
    ];
    if let Some((home, away)) = kind.participants() {
        faq.push(FaqEntry {
            question: format!("¿Dónde ver {home} vs {away}?"),
            answer: format!(
                "El partido entre {home} y {away} se transmite en vivo en {} el {}.",
                cfg.site_name, starts.short
            ),
        });
    }

    let intro = format!(
        "{} se juega el {} a las {} (hora de España). Aquí encontrarás la transmisión \
         en vivo, gratis y en HD.",
        stream.name, starts.long, starts.time
    );
    let description = match kind.participants() {
        Some((home, away)) => format!(
            "Sigue el {category_display} en directo: {home} recibe a {away} este {}. \
             En {} publicamos la señal minutos antes del inicio, sin registro y \
             compatible con cualquier dispositivo.",
            starts.long, cfg.site_name
        ),
        None => format!(
            "Disfruta de {} ({category_display}) en directo este {}. En {} publicamos \
             la señal minutos antes del inicio, sin registro y compatible con \
             cualquier dispositivo.",
            stream.name, starts.long, cfg.site_name
        ),
    };

    SeoBlocks {
        breadcrumbs,
        h1: format!("{} En Vivo", stream.name),
        h2: format!("{category_display} en directo - {}", starts.long),
        faq,
        content_blocks: ContentBlocks { intro, description },
    }
}

fn build_facts(
    stream: &SourceStream,
    kind: &EventKind,
    starts: &DateParts,
    ends: &DateParts,
    category_display: &str,
    category_slug: &str,
    now: i64,
) -> EventFacts {
    let status = EventStatus::from_window(stream.starts_at, stream.ends_at, now);
    let duration_minutes =
        ((stream.ends_at - stream.starts_at) as f64 / 60.0).round() as i64;
    let (home_team, away_team) = match kind.participants() {
        Some((home, away)) => (Some(home.to_string()), Some(away.to_string())),
        None => (None, None),
    };

    EventFacts {
        name: stream.name.clone(),
        category: category_display.to_string(),
        category_slug: category_slug.to_string(),
        tag: stream.tag.clone(),
        poster: stream.poster.clone(),
        starts_at: starts.iso.clone(),
        ends_at: ends.iso.clone(),
        date: starts.long.clone(),
        date_short: starts.short.clone(),
        time: starts.time.clone(),
        status,
        status_label: locale::status_label(status.as_str()),
        duration_minutes,
        // Upstream omits viewer counts for unstarted events; keep the
        // historical '0' string.
        viewers: stream.viewers.unwrap_or(0).to_string(),
        home_team,
        away_team,
    }
}

fn build_technical(always_live: bool, canonical_url: &str) -> CrawlHints {
    let (priority, changefreq) = if always_live {
        (0.9, ChangeFreq::Always)
    } else {
        (0.7, ChangeFreq::Hourly)
    };
    CrawlHints {
        priority,
        changefreq,
        canonical: canonical_url.to_string(),
        alternates: vec![
            AlternateLocale {
                hreflang: "es".to_string(),
                href: canonical_url.to_string(),
            },
            AlternateLocale {
                hreflang: "es-ES".to_string(),
                href: canonical_url.to_string(),
            },
            AlternateLocale {
                hreflang: "x-default".to_string(),
                href: canonical_url.to_string(),
            },
        ],
    }
}
