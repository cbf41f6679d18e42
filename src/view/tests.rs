#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::{NaiveTime, TimeZone, Timelike};
    use std::collections::HashSet;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap()
    }

    #[test]
    fn test_uptime_fill_percent() {
        let view = DashboardView::compose(&Dashboard::default(), fixed_time());
        assert_eq!(view.services[0].fill_percent, 99.9);
        assert_eq!(view.services[0].uptime_label, "99.9% uptime");
        assert_eq!(view.services[2].fill_percent, 100.0);
        assert_eq!(view.services[2].uptime_label, "100% uptime");
    }

    #[test]
    fn test_service_cards_follow_source_order() {
        let dashboard = Dashboard::default();
        let view = DashboardView::compose(&dashboard, fixed_time());

        assert_eq!(view.services.len(), dashboard.services.len());
        assert_eq!(view.services.len(), 3);
        for (card, service) in view.services.iter().zip(&dashboard.services) {
            assert_eq!(card.key, service.id);
            assert_eq!(card.name, service.name);
        }

        let keys: HashSet<_> = view.services.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_service_card_style_and_metrics() {
        let view = DashboardView::compose(&Dashboard::default(), fixed_time());
        let db = &view.services[1];
        assert_eq!(db.status, ServiceStatus::Slow);
        assert_eq!(db.style.label, "Lento");
        assert_eq!(db.response_time.value, "120ms");
        assert_eq!(db.response_time.label, "Tiempo de respuesta");
        assert_eq!(db.requests.value, "1.8M");
        assert_eq!(db.requests.label, "Peticiones");
    }

    #[test]
    fn test_stat_cards_are_literal() {
        let view = DashboardView::compose(&Dashboard::default(), fixed_time());
        let values: Vec<_> = view.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["3/3", "64ms", "1.2K"]);
    }

    #[test]
    fn test_stagger_delays() {
        let view = DashboardView::compose(&Dashboard::default(), fixed_time());
        let enter: Vec<_> = view.services.iter().map(|c| c.enter.delay).collect();
        let bar: Vec<_> = view.services.iter().map(|c| c.bar.delay).collect();
        assert_eq!(enter, vec![0.0, 0.1, 0.2]);
        assert_eq!(bar, vec![0.0, 0.2, 0.4]);
        assert_eq!(view.services[0].enter.duration, 0.5);
        assert_eq!(view.services[0].bar.duration, 1.0);

        let fourth = Animation::staggered(3, animation::CARD_STAGGER, 0.5);
        assert_eq!(fourth.delay, 0.3);
    }

    #[test]
    fn test_footer_format() {
        let view = DashboardView::compose(&Dashboard::default(), fixed_time());
        assert_eq!(view.footer.timestamp, "7:05:03");
        assert_eq!(view.footer.text, "Última actualización: 7:05:03");
        assert_eq!(view.footer.enter.delay, 0.8);
    }

    #[test]
    fn test_footer_two_digit_hour() {
        let evening = Local.with_ymd_and_hms(2024, 3, 9, 18, 0, 9).unwrap();
        assert_eq!(FooterView::at(&evening).timestamp, "18:00:09");

        let midnight = Local.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap();
        assert_eq!(FooterView::at(&midnight).timestamp, "0:00:00");
    }

    #[test]
    fn test_footer_matches_host_clock() {
        let before = Local::now();
        let view = DashboardView::now(&Dashboard::default());

        assert!(!view.footer.timestamp.is_empty());
        let shown = NaiveTime::parse_from_str(&view.footer.timestamp, TIME_FORMAT).unwrap();
        let diff = (shown - before.time().with_nanosecond(0).unwrap())
            .num_seconds()
            .abs();
        // Tolerate a midnight rollover between the two reads
        assert!(diff <= 1 || diff >= 86_399, "footer drifted {}s", diff);
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard {
            header: Header::default(),
            stats: Vec::new(),
            services: Vec::new(),
        };
        let view = DashboardView::compose(&dashboard, fixed_time());
        assert!(view.stats.is_empty());
        assert!(view.services.is_empty());
        assert!(!view.footer.text.is_empty());
    }
}
