#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::dashboard::Dashboard;
    use chrono::{DateTime, Local, TimeZone};

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 18, 30, 0).unwrap()
    }

    fn builtin_view() -> DashboardView {
        DashboardView::compose(&Dashboard::default(), fixed_time())
    }

    #[test]
    fn test_gradient_stops() {
        assert_eq!(
            gradient_stops("from-amber-500 to-orange-600"),
            (Some("amber-500"), Some("orange-600"))
        );
        assert_eq!(gradient_stops("to-red-600"), (None, Some("red-600")));
        assert_eq!(gradient_stops(""), (None, None));
    }

    #[test]
    fn test_text_render_plain() {
        let out = TextRenderer::new(false).render(&builtin_view()).unwrap();

        assert!(out.starts_with("Dashboard de Monitoreo TI\n"));
        assert!(out.contains("Servicios Activos"));
        assert!(out.contains("3/3"));
        assert!(out.contains("64ms"));
        assert!(out.contains("1.2K"));
        assert!(out.contains("✔ Operativo"));
        assert!(out.contains("◷ Lento"));
        assert!(out.contains("99.5% uptime"));
        assert!(out.contains("Tiempo de respuesta 120ms"));
        assert!(out.contains("Peticiones 5.2M"));
        assert!(out.trim_end().ends_with("Última actualización: 18:30:00"));
        assert!(!out.contains('\u{1b}'));

        let api = out.find("API Gateway").unwrap();
        let db = out.find("Base de Datos").unwrap();
        let web = out.find("Frontend Web").unwrap();
        assert!(api < db && db < web);
    }

    #[test]
    fn test_html_render_cards() {
        let out = HtmlRenderer.render(&builtin_view()).unwrap();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert_eq!(out.matches("<article class=\"card").count(), 3);
        assert_eq!(out.matches("<div class=\"stat\"").count(), 3);

        let api = out.find("data-key=\"api-gateway\"").unwrap();
        let db = out.find("data-key=\"database\"").unwrap();
        let web = out.find("data-key=\"frontend\"").unwrap();
        assert!(api < db && db < web);

        assert!(out.contains("class=\"card status-slow\""));
        assert!(!out.contains("<span>Caído</span>"));
        assert!(out.contains("<span>Lento</span>"));
        assert!(out.contains("width: 99.9%"));
        assert!(out.contains("animation: rise 0.50s ease-out 0.10s backwards"));
        assert!(out.contains("animation: grow 1.00s ease-out 0.40s backwards"));
        assert!(out.contains("animation: fade 0.60s ease-out 0.80s backwards"));
        assert!(out.contains("Última actualización: 18:30:00"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut dashboard = Dashboard::default();
        dashboard.services[0].name = "<script>alert(1)</script>".to_string();
        dashboard.stats[0].value = "a & b".to_string();
        let view = DashboardView::compose(&dashboard, fixed_time());

        let out = HtmlRenderer.render(&view).unwrap();
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(out.contains("a &amp; b"));
    }

    #[test]
    fn test_json_render() {
        let out = JsonRenderer.render(&builtin_view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        let services = value["services"].as_array().unwrap();
        assert_eq!(services.len(), 3);
        assert_eq!(services[0]["key"], "api-gateway");
        assert_eq!(services[0]["status"], "operational");
        assert_eq!(services[0]["style"]["label"], "Operativo");
        assert_eq!(services[0]["fill_percent"], 99.9);
        assert_eq!(services[1]["icon"], "database");

        let stats: Vec<_> = value["stats"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["value"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(stats, vec!["3/3", "64ms", "1.2K"]);
        assert_eq!(value["footer"]["timestamp"], "18:30:00");
        assert!(value.get("rendered_at").is_none());
    }

    #[test]
    fn test_format_selects_renderer() {
        let view = builtin_view();
        let html = Format::Html.renderer(true).render(&view).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        let json = Format::Json.renderer(true).render(&view).unwrap();
        assert!(json.starts_with('{'));
        assert_eq!(Format::default(), Format::Text);
        assert_eq!(Format::Json.to_string(), "json");
    }
}
