//! Image path resolution.
//!
//! Artwork is addressed purely by naming convention (the entity id embedded
//! in the filename); there is no manifest or content hash. The canonical
//! combo-style prefix is `combostyle-`. The view substitutes
//! [`PLACEHOLDER_IMAGE`] when the image fails to load.

use crate::model::order::OrderItem;
use crate::resolve::kind::ItemKind;

/// Path of the neutral asset shown when no convention applies or the real
/// image fails to load, relative to the image base URL.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Convention-based image path for one order item, rooted at `base`.
/// `kind` must come from [`crate::resolve::kind::classify`] on the same item.
pub fn image_path(item: &OrderItem, kind: ItemKind, base: &str) -> String {
    let base = base.trim_end_matches('/');
    match kind {
        ItemKind::ComboStyle => match &item.combo_style_item_id {
            Some(id) => format!("{}/images/combostyle-{}.png", base, id),
            None => placeholder(base),
        },
        ItemKind::UserChoice => match item
            .user_choice
            .as_ref()
            .and_then(|rel| rel.image_url.clone())
            .filter(|url| !url.is_empty())
        {
            // Already a full or partial path supplied by the backend.
            Some(url) => url,
            None => placeholder(base),
        },
        ItemKind::Combo => match &item.combo_id {
            Some(id) => format!("{}/images/combo-{}.png", base, id),
            None => placeholder(base),
        },
        ItemKind::OtherItem => match &item.other_item_id {
            Some(id) => format!("{}/images/other-{}.png", base, id),
            None => placeholder(base),
        },
        ItemKind::LegacyUserChoice => placeholder(base),
        ItemKind::Pizza => match &item.pizza_id {
            Some(id) => format!("{}/images/pizza-{}.png", base, id),
            None => placeholder(base),
        },
    }
}

/// Placeholder path under `base`, for both the no-convention fallback and the
/// view's load-error substitution.
pub fn placeholder(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), PLACEHOLDER_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::order::RelationSummary;
    use crate::resolve::kind::classify;

    #[test]
    fn combo_style_uses_the_canonical_prefix() {
        let item = OrderItem {
            combo_style_item_id: Some("csi1".into()),
            ..Default::default()
        };
        assert_eq!(
            image_path(&item, classify(&item), ""),
            "/images/combostyle-csi1.png"
        );
    }

    #[test]
    fn each_kind_maps_to_its_own_convention() {
        let combo = OrderItem {
            combo_id: Some("c9".into()),
            is_combo: true,
            ..Default::default()
        };
        assert_eq!(
            image_path(&combo, classify(&combo), ""),
            "/images/combo-c9.png"
        );

        let other = OrderItem {
            other_item_id: Some("o3".into()),
            is_other_item: true,
            ..Default::default()
        };
        assert_eq!(
            image_path(&other, classify(&other), ""),
            "/images/other-o3.png"
        );

        let pizza = OrderItem {
            pizza_id: Some("p7".into()),
            ..Default::default()
        };
        assert_eq!(
            image_path(&pizza, classify(&pizza), ""),
            "/images/pizza-p7.png"
        );
    }

    #[test]
    fn base_url_is_prepended_without_double_slashes() {
        let item = OrderItem {
            pizza_id: Some("p7".into()),
            ..Default::default()
        };
        assert_eq!(
            image_path(&item, classify(&item), "https://cdn.example/"),
            "https://cdn.example/images/pizza-p7.png"
        );
    }

    #[test]
    fn user_choice_image_url_passes_through_verbatim() {
        let item = OrderItem {
            user_choice_id: Some("uc1".into()),
            user_choice: Some(RelationSummary {
                image_url: Some("/uploads/feast.jpg".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(image_path(&item, classify(&item), ""), "/uploads/feast.jpg");
    }

    #[test]
    fn legacy_deal_gets_the_placeholder() {
        let item = OrderItem {
            price: Some(75.0),
            ..Default::default()
        };
        assert_eq!(
            image_path(&item, classify(&item), ""),
            "/images/placeholder.png"
        );
    }
}
