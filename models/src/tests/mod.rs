mod article_query;
