//! Storefront API GraphQL documents.
//!
//! These are wire contracts with the storefront backend: field selections
//! must stay in step with [`pdp_core::Product`], [`pdp_core::Variant`],
//! [`pdp_core::MediaRecord`] and [`pdp_core::ProductSummary`].

/// Operation name of [`PRODUCT_QUERY`].
pub const PRODUCT_OPERATION: &str = "Product";

/// Operation name of [`RECOMMENDATIONS_QUERY`].
pub const RECOMMENDATIONS_OPERATION: &str = "productRecommendations";

/// Product by handle, with the options-matched variant and a one-element
/// positional fallback list.
pub const PRODUCT_QUERY: &str = r"query Product(
  $country: CountryCode
  $language: LanguageCode
  $handle: String!
  $selectedOptions: [SelectedOptionInput!]!
) @inContext(country: $country, language: $language) {
  product(handle: $handle) {
    id
    title
    vendor
    handle
    descriptionHtml
    description
    options {
      name
      values
    }
    selectedVariant: variantBySelectedOptions(selectedOptions: $selectedOptions) {
      ...ProductVariantFragment
    }
    media(first: 7) {
      nodes {
        ...Media
      }
    }
    variants(first: 1) {
      nodes {
        ...ProductVariantFragment
      }
    }
  }
}

fragment Media on Media {
  __typename
  mediaContentType
  alt
  previewImage {
    url
  }
  ... on MediaImage {
    id
    image {
      id
      url
      width
      height
    }
  }
  ... on Video {
    id
    sources {
      mimeType
      url
    }
  }
  ... on Model3d {
    id
    sources {
      mimeType
      url
    }
  }
  ... on ExternalVideo {
    id
    embedUrl
    host
  }
}

fragment ProductVariantFragment on ProductVariant {
  id
  availableForSale
  selectedOptions {
    name
    value
  }
  image {
    id
    url
    altText
    width
    height
  }
  price {
    amount
    currencyCode
  }
  compareAtPrice {
    amount
    currencyCode
  }
  sku
  title
  unitPrice {
    amount
    currencyCode
  }
  product {
    title
    handle
  }
}
";

/// Recommendations for a product id, as product-card summaries.
pub const RECOMMENDATIONS_QUERY: &str = r"query productRecommendations(
  $productId: ID!
  $country: CountryCode
  $language: LanguageCode
) @inContext(country: $country, language: $language) {
  productRecommendations(productId: $productId) {
    ...ProductCard
  }
}

fragment ProductCard on Product {
  id
  title
  publishedAt
  handle
  vendor
  variants(first: 1) {
    nodes {
      id
      title
      availableForSale
      image {
        url
        altText
        width
        height
      }
      price {
        amount
        currencyCode
      }
      compareAtPrice {
        amount
        currencyCode
      }
      selectedOptions {
        name
        value
      }
      product {
        handle
        title
      }
    }
  }
}
";
