use contracts::domain::{a001_product, a002_product_category, a003_product_variant};

/// Catalog collections exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Product,
    ProductCategory,
    ProductVariant,
}

impl Resource {
    pub const ALL: [Resource; 3] = [
        Resource::Product,
        Resource::ProductCategory,
        Resource::ProductVariant,
    ];

    /// API path segment; the client-side routes reuse it
    pub fn path(self) -> &'static str {
        match self {
            Resource::Product => a001_product::aggregate::RESOURCE_PATH,
            Resource::ProductCategory => a002_product_category::aggregate::RESOURCE_PATH,
            Resource::ProductVariant => a003_product_variant::aggregate::RESOURCE_PATH,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Product => "Products",
            Resource::ProductCategory => "Product Categories",
            Resource::ProductVariant => "Product Variants",
        }
    }

    /// Singular label for form headings
    pub fn singular(self) -> &'static str {
        match self {
            Resource::Product => "Product",
            Resource::ProductCategory => "Product Category",
            Resource::ProductVariant => "Product Variant",
        }
    }

    /// Entity key used in page ids (`{entity}--{category}`)
    pub fn page_key(self) -> &'static str {
        match self {
            Resource::Product => "a001_product",
            Resource::ProductCategory => "a002_product_category",
            Resource::ProductVariant => "a003_product_variant",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Resource::Product => "products",
            Resource::ProductCategory => "folder",
            Resource::ProductVariant => "layers",
        }
    }

    pub fn list_route(self) -> String {
        format!("/{}", self.path())
    }

    pub fn create_route(self) -> String {
        format!("/{}/create", self.path())
    }

    pub fn edit_route(self, id: &str) -> String {
        format!("/{}/edit/{}", self.path(), urlencoding::encode(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Resource::Product.path(), "product");
        assert_eq!(Resource::ProductCategory.path(), "product-categories");
        assert_eq!(Resource::ProductVariant.path(), "product-variant");
    }

    #[test]
    fn test_routes() {
        assert_eq!(Resource::ProductVariant.list_route(), "/product-variant");
        assert_eq!(Resource::ProductCategory.create_route(), "/product-categories/create");
        assert_eq!(Resource::Product.edit_route("42"), "/product/edit/42");
    }
}
